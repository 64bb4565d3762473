//! rDosePlan main entrypoint.

use rdoseplan::{init_tracing, run};
use rdoseplan::ui::messages::error;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
