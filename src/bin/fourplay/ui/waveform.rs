//! Waveform oscilloscope widget

use ratatui::{
    layout::Rect,
    style::Color,
    symbols,
    widgets::canvas::{Canvas, Context, Line},
    Frame,
};

use fourplay::{
    scope::{polyline, Band, StackLayout},
    synth::Waveforms,
};

const COMBINED_COLOR: Color = Color::LightGreen;
const VOICE_COLORS: [Color; 4] = [
    Color::LightRed,
    Color::LightYellow,
    Color::LightBlue,
    Color::LightMagenta,
];

/// Braille cells are 2 dots wide and 4 dots tall.
const DOTS_X: usize = 2;
const DOTS_Y: usize = 4;

/// Render the combined waveform over the top half, each voice below it
pub fn render_waveforms(frame: &mut Frame, area: Rect, waveforms: &Waveforms) {
    // Plot resolution is re-derived from the area every frame
    let width = area.width as usize * DOTS_X;
    let height = (area.height as usize * DOTS_Y) as f64;

    let voices: Vec<usize> = waveforms.enabled_voices().collect();
    let layout = StackLayout::new(height, voices.len());

    let canvas = Canvas::default()
        .background_color(Color::Black)
        .marker(symbols::Marker::Braille)
        .x_bounds([0.0, width as f64])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            draw_trace(ctx, waveforms.combined(), width, height, layout.combined, COMBINED_COLOR);
            for (&voice, &band) in voices.iter().zip(&layout.voices) {
                let color = VOICE_COLORS[voice % VOICE_COLORS.len()];
                draw_trace(ctx, waveforms.voice(voice), width, height, band, color);
            }
        });

    frame.render_widget(canvas, area);
}

/// Draw one polyline, flipping from screen space (y down) to canvas space (y up)
fn draw_trace(ctx: &mut Context, samples: &[f32], width: usize, height: f64, band: Band, color: Color) {
    for segment in polyline(samples, width, band) {
        ctx.draw(&Line {
            x1: segment.x1,
            y1: height - segment.y1,
            x2: segment.x2,
            y2: height - segment.y2,
            color,
        });
    }
}
