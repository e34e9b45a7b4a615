use clap::Parser;

/// Arguments for set command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Point the allow-office rule at a new office egress IP:\n    rulesweep set kenfautest allow-office 100 203.0.113.7\n\n\
                  Rules are matched by exact name; every matching entry in every\n  \
                  kenfautest* app service is rewritten with the given priority and IP.")]
pub struct SetArgs {
    /// App service name prefix to match (case-sensitive)
    pub prefix: String,

    /// Exact name of the IP restriction rule to rewrite
    pub rule_name: String,

    /// New rule priority
    #[arg(allow_negative_numbers = true)]
    pub priority: i32,

    /// New IP address or CIDR block for the rule (not validated)
    pub ip_address: String,
}
