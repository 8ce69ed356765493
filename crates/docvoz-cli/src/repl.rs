//! Interactive loop translating input lines into typed UI commands.
//!
//! Lines starting with `:` are control commands; anything else is sent to
//! the assistant as a question.

use std::io::Write;
use std::path::PathBuf;

use docvoz_core::{AppCore, UiCommand};
use tokio::io::AsyncBufReadExt;

const HELP: &str = "\
Comandos:
  :leer N         leer el párrafo N en voz alta
  :pausa          pausar o reanudar la lectura
  :stop           detener la lectura
  :comp N         pedir información complementaria del párrafo N
  :exportar [DIR] guardar la conversación (por defecto, el directorio actual)
  :ayuda          mostrar esta ayuda
  :salir          terminar
Cualquier otro texto se envía como pregunta.";

/// What one input line asks the loop to do.
#[derive(Debug)]
pub enum Action {
    Dispatch(UiCommand),
    Help,
    Quit,
    Nothing,
    Invalid(String),
}

pub fn parse_line(line: &str) -> Action {
    let line = line.trim();
    if line.is_empty() {
        return Action::Nothing;
    }
    if !line.starts_with(':') {
        return Action::Dispatch(UiCommand::SubmitQuestion {
            text: line.to_string(),
        });
    }

    let mut parts = line.splitn(2, char::is_whitespace);
    let verb = parts.next().unwrap_or(line);
    let rest = parts.next().map_or("", str::trim);
    match verb {
        ":leer" => parse_index(rest).map_or_else(
            || Action::Invalid("uso: :leer N".to_string()),
            |index| Action::Dispatch(UiCommand::ClickParagraph { index }),
        ),
        ":comp" => parse_index(rest).map_or_else(
            || Action::Invalid("uso: :comp N".to_string()),
            |index| Action::Dispatch(UiCommand::RequestComplement { index }),
        ),
        ":pausa" => Action::Dispatch(UiCommand::TogglePause),
        ":stop" => Action::Dispatch(UiCommand::StopReading),
        ":exportar" => {
            let dir = if rest.is_empty() {
                PathBuf::from(".")
            } else {
                PathBuf::from(rest)
            };
            Action::Dispatch(UiCommand::ExportTranscript { dir })
        }
        ":ayuda" => Action::Help,
        ":salir" => Action::Quit,
        other => Action::Invalid(format!("comando desconocido: {other}")),
    }
}

fn parse_index(arg: &str) -> Option<usize> {
    arg.parse().ok()
}

/// Run the loop until `:salir` or end of input.
pub async fn run(core: &AppCore) -> anyhow::Result<()> {
    println!("{HELP}");
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match parse_line(&line) {
            Action::Quit => break,
            Action::Help => println!("{HELP}"),
            Action::Nothing => {}
            Action::Invalid(message) => println!("{message}"),
            Action::Dispatch(command) => {
                core.dispatch(command).await;
                // The console engine completes instantly; the poll settles
                // playback state before the next prompt.
                core.tick();
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_becomes_a_question() {
        assert!(matches!(
            parse_line("¿De qué trata el documento?"),
            Action::Dispatch(UiCommand::SubmitQuestion { text })
                if text == "¿De qué trata el documento?"
        ));
    }

    #[test]
    fn read_command_carries_the_paragraph_index() {
        assert!(matches!(
            parse_line(":leer 3"),
            Action::Dispatch(UiCommand::ClickParagraph { index: 3 })
        ));
        assert!(matches!(
            parse_line(":comp 0"),
            Action::Dispatch(UiCommand::RequestComplement { index: 0 })
        ));
    }

    #[test]
    fn read_without_index_is_invalid() {
        assert!(matches!(parse_line(":leer"), Action::Invalid(_)));
        assert!(matches!(parse_line(":leer tres"), Action::Invalid(_)));
    }

    #[test]
    fn export_defaults_to_the_current_directory() {
        assert!(matches!(
            parse_line(":exportar"),
            Action::Dispatch(UiCommand::ExportTranscript { dir }) if dir == PathBuf::from(".")
        ));
        assert!(matches!(
            parse_line(":exportar /tmp/chats"),
            Action::Dispatch(UiCommand::ExportTranscript { dir })
                if dir == PathBuf::from("/tmp/chats")
        ));
    }

    #[test]
    fn blank_lines_do_nothing() {
        assert!(matches!(parse_line(""), Action::Nothing));
        assert!(matches!(parse_line("   "), Action::Nothing));
    }

    #[test]
    fn unknown_command_is_reported() {
        assert!(matches!(
            parse_line(":volar"),
            Action::Invalid(message) if message.contains(":volar")
        ));
    }

    #[test]
    fn quit_and_help_are_recognized() {
        assert!(matches!(parse_line(":salir"), Action::Quit));
        assert!(matches!(parse_line(":ayuda"), Action::Help));
    }
}
