//! Transport bar widget - shows stream format, voices, and audio stats

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use fourplay::{synth::Waveforms, BUFFER_SIZE, MAX_VOICES};

/// Render the one-line status bar under the scope
pub fn render_transport(
    frame: &mut Frame,
    area: Rect,
    waveforms: &Waveforms,
    sample_rate: u32,
    frequencies: &[f32; MAX_VOICES],
) {
    // Format sample rate nicely (e.g., 44100 -> "44.1kHz")
    let sample_rate_khz = sample_rate as f32 / 1000.0;

    let voices: Vec<String> = waveforms
        .enabled_voices()
        .map(|voice| format!("{:.2}", frequencies[voice]))
        .collect();

    let line = Line::from(vec![
        Span::styled(
            format!(" {:.1}kHz/{}  ", sample_rate_khz, BUFFER_SIZE),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("Voices: {} Hz  ", voices.join(" ")),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("Peak: {:.2}  RMS: {:.2}  ", waveforms.peak(), waveforms.rms()),
            Style::default().fg(Color::Magenta),
        ),
        Span::styled(
            "[Space] Play/Pause  [Esc] Quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
