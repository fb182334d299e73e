//! virada main entrypoint.

use virada_schedule::run;
use virada_schedule::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
