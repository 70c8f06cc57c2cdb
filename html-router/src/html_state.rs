use std::sync::Arc;

use common::utils::config::AppConfig;
use minijinja::Environment;
use tracing::debug;

/// Template engine plus configuration for the html routes. Templates are
/// embedded at compile time and the environment is immutable afterwards.
#[derive(Clone)]
pub struct HtmlState {
    pub templates: Arc<Environment<'static>>,
    pub config: AppConfig,
}

impl HtmlState {
    pub fn new(config: AppConfig) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("index.html", include_str!("../templates/index.html"))?;
        debug!("Template engine configured for html_router.");

        Ok(Self {
            templates: Arc::new(env),
            config,
        })
    }
}
