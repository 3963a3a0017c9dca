use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use clap::Args;
use tracing::debug;

use crate::catalog::find;
use crate::cli::BackendArgs;
use crate::controller::{Controller, ControllerEvent};
use crate::predict::client::PredictionBackend;
use crate::report::text::{render_lifecycle, render_selection};

#[derive(Args, Debug)]
pub struct SessionArgs {
    #[command(flatten)]
    pub(crate) backend: BackendArgs,
}

const HELP: &str = "\
commands:
  search TEXT   list catalog symptoms containing TEXT
  add NAME|N    select a symptom by name or by its number in the last search
  remove NAME   deselect a symptom
  clear         deselect everything
  list          show selected symptoms
  submit        predict diseases for the selection
  help          show this message
  quit          leave the session
";

pub fn handle(args: SessionArgs) -> anyhow::Result<()> {
    let mut controller = args.backend.controller()?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(&mut controller, stdin.lock(), stdout.lock())
}

/// Drives `controller` from line commands on `input`.
///
/// Lifecycle output is produced by a controller listener, so the loop only
/// prints what the listener queued after each command.
pub(crate) fn run_session<B, R, W>(
    controller: &mut Controller<B>,
    input: R,
    mut out: W,
) -> anyhow::Result<()>
where
    B: PredictionBackend,
    R: BufRead,
    W: Write,
{
    let pending: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = Rc::clone(&pending);
    controller.subscribe(move |event, state| {
        if event == ControllerEvent::LifecycleChanged {
            sink.borrow_mut().push(render_lifecycle(&state.lifecycle));
        }
    });

    write!(out, "{HELP}")?;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };
        debug!(cmd, "session command");

        match cmd {
            "" => {}
            "search" => {
                controller.set_search(rest);
                let matches = controller.filtered();
                if rest.is_empty() {
                    writeln!(out, "enter some text to search")?;
                } else if matches.is_empty() {
                    writeln!(out, "no symptoms match {rest:?}")?;
                } else {
                    for (idx, name) in matches.iter().enumerate() {
                        writeln!(out, "{:>3}. {name}", idx + 1)?;
                    }
                }
            }
            "add" => match pick(controller, rest) {
                Some(name) => {
                    if !controller.add_symptom(name) {
                        writeln!(out, "{name} is already selected")?;
                    }
                    write!(out, "{}", render_selection(controller.selection().iter()))?;
                }
                None => writeln!(out, "unknown symptom: {rest:?}")?,
            },
            "remove" => {
                let name = find(rest).unwrap_or(rest);
                if !controller.remove_symptom(name) {
                    writeln!(out, "{rest} is not selected")?;
                }
                write!(out, "{}", render_selection(controller.selection().iter()))?;
            }
            "clear" => {
                controller.clear_selection();
                write!(out, "{}", render_selection(controller.selection().iter()))?;
            }
            "list" => write!(out, "{}", render_selection(controller.selection().iter()))?,
            "submit" => {
                controller.submit();
            }
            "help" => write!(out, "{HELP}")?,
            "quit" | "exit" => break,
            other => writeln!(out, "unknown command: {other} (try help)")?,
        }

        for text in pending.borrow_mut().drain(..) {
            write!(out, "{text}")?;
        }
        out.flush()?;
    }
    Ok(())
}

/// Resolves `add` input: a 1-based index into the current search results,
/// otherwise a catalog name.
fn pick<B: PredictionBackend>(controller: &Controller<B>, input: &str) -> Option<&'static str> {
    if let Ok(n) = input.parse::<usize>() {
        if controller.search().is_empty() {
            return None;
        }
        return n.checked_sub(1).and_then(|idx| controller.filtered().get(idx).copied());
    }
    find(input)
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/session.rs"]
mod tests;
