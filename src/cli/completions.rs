use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    rulesweep completions bash > ~/.bash_completion.d/rulesweep\n\n\
                  Generate zsh completions:\n    rulesweep completions zsh > ~/.zfunc/_rulesweep\n\n\
                  Generate fish completions:\n    rulesweep completions fish > ~/.config/fish/completions/rulesweep.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
