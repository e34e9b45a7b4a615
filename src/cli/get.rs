use clap::Parser;

/// Arguments for get command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Report rules of every app service named kenfautest*:\n    rulesweep get kenfautest\n\n\
                  Works with the same argument tail as set (extras are ignored):\n    rulesweep get kenfautest allow-office 100 1.2.3.4")]
pub struct GetArgs {
    /// App service name prefix to match (case-sensitive)
    pub prefix: String,

    /// Trailing set-style arguments, accepted and ignored
    #[arg(hide = true, value_name = "IGNORED", num_args = 0..=3)]
    #[allow(dead_code)]
    pub ignored: Vec<String>,
}
