//! Terminal presentation of the session state.
//!
//! The whole state is re-rendered after every event, mirroring the
//! page-wide redraw of the original interface.

use crate::image::RenderedImage;
use crate::models::Sender;
use crate::session::SessionState;
use crate::Result;
use std::io::Write;

const TITLE: &str = "🗡️  Assistente de Hyrule IA";
const USER_LABEL: &str = "Você";
const BOT_LABEL: &str = "Oráculo";

/// Write the full themed chat log for the current state.
pub fn render_chat(state: &SessionState, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "Como posso ajudar o Herói de Hyrule?")?;
    writeln!(out)?;

    for turn in &state.history {
        let label = match turn.sender {
            Sender::User => USER_LABEL,
            Sender::Bot => BOT_LABEL,
        };
        writeln!(out, "{}: {}", label, turn.message)?;
    }

    if state.image_panel_visible {
        writeln!(out)?;
        writeln!(out, "🌌 Criar Visão da Pedra Sheikah")?;
        writeln!(out, "Descreva sua visão mística com /visao <texto>")?;
    }

    Ok(())
}

/// Announce a freshly rendered image. Presentation only; the image is not
/// part of the chat log.
pub fn render_image_notice(rendered: &RenderedImage, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "Visão da Pedra Sheikah ({}x{}): {}",
        rendered.width,
        rendered.height,
        rendered.path.display()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChatTurn;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn render_to_string(state: &SessionState) -> String {
        let mut buf = Vec::new();
        render_chat(state, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_empty_state_shows_title_only() {
        let output = render_to_string(&SessionState::default());

        assert!(output.contains("Assistente de Hyrule IA"));
        assert!(!output.contains("Você:"));
        assert!(!output.contains("Pedra Sheikah"));
    }

    #[test]
    fn test_render_labels_turns_in_order() {
        let state = SessionState {
            history: vec![
                ChatTurn::user("Onde fica Kakariko?"),
                ChatTurn::bot("Nas montanhas a leste."),
            ],
            image_panel_visible: false,
        };

        let output = render_to_string(&state);
        let user_pos = output.find("Você: Onde fica Kakariko?").unwrap();
        let bot_pos = output.find("Oráculo: Nas montanhas a leste.").unwrap();
        assert!(user_pos < bot_pos);
    }

    #[test]
    fn test_render_shows_panel_banner_when_visible() {
        let state = SessionState {
            history: Vec::new(),
            image_panel_visible: true,
        };

        let output = render_to_string(&state);
        assert!(output.contains("Criar Visão da Pedra Sheikah"));
    }

    #[test]
    fn test_render_image_notice_includes_dimensions_and_path() {
        let rendered = RenderedImage {
            width: 512,
            height: 512,
            path: PathBuf::from("output/visao_test.png"),
        };

        let mut buf = Vec::new();
        render_image_notice(&rendered, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert_eq!(
            output,
            "Visão da Pedra Sheikah (512x512): output/visao_test.png\n"
        );
    }
}
