use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    agent-starter-pack completions bash > ~/.bash_completion.d/agent-starter-pack\n\n\
                  Generate zsh completions:\n    agent-starter-pack completions zsh > ~/.zfunc/_agent-starter-pack\n\n\
                  Generate fish completions:\n    agent-starter-pack completions fish > ~/.config/fish/completions/agent-starter-pack.fish\n\n\
                  Generate PowerShell completions:\n    agent-starter-pack completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
