use orakel_core::AppError;

/// Builds a cluster client from the in-cluster service account, falling back
/// to the local kubeconfig.
pub async fn build_kube_client() -> Result<kube::Client, AppError> {
    kube::Client::try_default().await.map_err(|error| {
        AppError::Internal(format!(
            "couldn't load configuration to connect to cluster: {error}"
        ))
    })
}
