use minish::{cmd, CommandRegistry, Outcome, Shell, ShellConfig};

use anyhow::Result;

fn main() -> Result<()> {
    let registry = CommandRegistry::with_builtins(vec![
        cmd!("dog", ["d"], |_| Ok(Outcome::output("woof"))),
        cmd!("cat", |args| {
            Ok(Outcome::Output(format!("meow {}", args.join(" "))))
        }),
    ])?;

    let mut shell = Shell::stdio(ShellConfig::default().with_prompt("| "), registry);
    let code = shell.run()?;

    std::process::exit(code)
}
