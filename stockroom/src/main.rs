use std::process::ExitCode;

use stockroom_core::{init_tracing, StockroomConfig};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let result = match StockroomConfig::load("dev") {
        Ok(config) => stockroom::run(config).await,
        Err(err) => Err(err.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Stockroom failed to start");
            ExitCode::FAILURE
        }
    }
}
