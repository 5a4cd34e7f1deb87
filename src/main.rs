//! rTeamcal main entrypoint.

use rteamcal::run;
use rteamcal::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
