mod kube;
mod redis;
mod state_builder;

pub use state_builder::build_app_state;
