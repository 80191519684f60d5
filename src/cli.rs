//! Command-line interface configuration.
//!
//! The port and the served directory are fixed; the only switch controls
//! the access log.

use argh::FromArgs;

/// MapleQuest RPG development server, serving the project directory on port 8000
#[derive(Debug, FromArgs)]
pub struct Cli {
    /// log every request with its status and latency
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}
