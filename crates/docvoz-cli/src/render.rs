//! Terminal renderer for core UI events.
//!
//! Events arrive as absolute state; the renderer prints and forgets. It is
//! stateless so it can be cloned freely behind the emitter port.

use docvoz_core::{MessageStyle, PlaybackState, UiEvent, UiEventEmitter};

const PREVIEW_CHARS: usize = 80;

#[derive(Debug, Clone, Default)]
pub struct TerminalRenderer;

impl TerminalRenderer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl UiEventEmitter for TerminalRenderer {
    fn emit(&self, event: UiEvent) {
        match event {
            UiEvent::DocumentLoaded { paragraphs } => {
                println!("Documento cargado ({} párrafos):", paragraphs.len());
                for p in &paragraphs {
                    println!("  [{}] {}", p.index, preview(&p.text));
                }
            }
            UiEvent::UploadFailed { message } | UiEvent::Notice { message } => {
                println!("⚠ {message}");
            }
            UiEvent::MessageAppended { message, style } => {
                let prefix = message.kind.export_prefix();
                match style {
                    MessageStyle::RateLimit => {
                        println!("{prefix}{} (límite de solicitudes)", message.text);
                    }
                    MessageStyle::Normal | MessageStyle::Error => {
                        println!("{prefix}{}", message.text);
                    }
                }
            }
            UiEvent::TypingChanged { visible } => {
                if visible {
                    println!("El asistente está escribiendo...");
                }
            }
            UiEvent::SuggestionsUpdated { questions } => {
                println!("Preguntas sugeridas:");
                for question in &questions {
                    println!("  · {question}");
                }
            }
            UiEvent::ComplementLoading { paragraph } => {
                println!("Buscando información para el párrafo {paragraph}...");
            }
            UiEvent::ComplementReady {
                paragraph,
                complement,
                sources,
            } => {
                println!("Complemento del párrafo {paragraph}:");
                println!("{complement}");
                if !sources.is_empty() {
                    println!("Fuentes:");
                    for source in &sources {
                        println!("  - {} ({})", source.name, source.url);
                    }
                }
            }
            UiEvent::ComplementFailed { paragraph, message } => {
                println!("Párrafo {paragraph}: {message}");
            }
            UiEvent::HighlightChanged { paragraph } => {
                if let Some(index) = paragraph {
                    println!("▶ leyendo el párrafo {index}");
                }
            }
            UiEvent::PlaybackChanged { state } => match state {
                PlaybackState::Speaking => println!("Lectura iniciada."),
                PlaybackState::Paused => println!("Lectura en pausa."),
                PlaybackState::Idle => println!("Lectura detenida."),
            },
            UiEvent::TranscriptExported { path } => {
                println!("Conversación guardada en {}", path.display());
            }
        }
    }

    fn clone_box(&self) -> Box<dyn UiEventEmitter> {
        Box::new(self.clone())
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        text.to_string()
    } else {
        let head: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{head}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_keeps_short_text_intact() {
        assert_eq!(preview("corto"), "corto");
    }

    #[test]
    fn preview_truncates_on_char_boundaries() {
        let long = "á".repeat(100);
        let shown = preview(&long);
        assert_eq!(shown.chars().count(), PREVIEW_CHARS + 1);
        assert!(shown.ends_with('…'));
    }
}
