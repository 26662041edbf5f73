use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    tex2svg completions bash > ~/.bash_completion.d/tex2svg\n\n\
                  Generate zsh completions:\n    tex2svg completions zsh > ~/.zfunc/_tex2svg\n\n\
                  Generate fish completions:\n    tex2svg completions fish > ~/.config/fish/completions/tex2svg.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
