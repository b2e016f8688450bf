use crate::error::{AsdfError, Result};
use crate::ui;
use std::process::{Command, ExitStatus, Stdio};

/// Exit status plus stdout and stderr joined into one text.
#[derive(Debug)]
pub(super) struct CapturedOutput {
    pub status: ExitStatus,
    pub text: String,
}

/// Render argv for logs and error messages.
pub(super) fn display_command(program: &str, args: &[&str]) -> String {
    let words = std::iter::once(program).chain(args.iter().copied());
    shlex::try_join(words.clone()).unwrap_or_else(|_| words.collect::<Vec<_>>().join(" "))
}

/// Run a command to completion, capturing everything it prints.
///
/// Blocks until the child exits; there is no timeout.
pub(super) fn run_captured(program: &str, args: &[&str]) -> Result<CapturedOutput> {
    let cmdline = display_command(program, args);
    ui::command(&cmdline);

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| AsdfError::SystemCommandFailed {
            command: cmdline.clone(),
            reason: e.to_string(),
        })?;

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    Ok(CapturedOutput {
        status: output.status,
        text,
    })
}

/// Like [`run_captured`], but a non-zero exit becomes `CommandFailed`.
pub(super) fn run_checked(program: &str, args: &[&str]) -> Result<String> {
    let captured = run_captured(program, args)?;
    if !captured.status.success() {
        return Err(AsdfError::CommandFailed {
            command: display_command(program, args),
            status: captured.status.to_string(),
            output: captured.text,
        });
    }
    Ok(captured.text)
}
