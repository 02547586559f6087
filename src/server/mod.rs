pub mod api;

use crate::cli::Args;
use std::error::Error;

pub struct Server {
    args: Args,
}

impl Server {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let state = api::build_state(&self.args);
        api::start_http_server(&self.args, state).await
    }
}
