use super::NUMERAL_FONT;
use super::model::ClockState;
use crate::gui::theme::ThemeColors;
use cairo::{Context, FontSlant, FontWeight, LineCap};
use clockface::{DialSpec, HandAngles, HandGeometry, Numeral, Segment, TickMark};
use palette::Srgba;
use std::f64::consts::PI;

fn set_color(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

fn stroke_segment(cr: &Context, segment: &Segment) -> Result<(), cairo::Error> {
    cr.move_to(segment.start.x, segment.start.y);
    cr.line_to(segment.end.x, segment.end.y);
    cr.stroke()
}

/// Paints one dial. All coordinates are relative to the dial center; every
/// primitive is drawn upright and turned into place with a rotation.
struct DialRenderer<'a> {
    dial: &'a DialSpec,
    angles: &'a HandAngles,
    colors: &'a ThemeColors,
}

impl<'a> DialRenderer<'a> {
    fn new(dial: &'a DialSpec, angles: &'a HandAngles, colors: &'a ThemeColors) -> Self {
        Self {
            dial,
            angles,
            colors,
        }
    }

    fn draw(&self, cr: &Context) -> Result<(), cairo::Error> {
        self.draw_face(cr)?;
        for tick in &self.dial.ticks {
            self.draw_tick(cr, tick)?;
        }
        if self.dial.numerals_visible {
            self.draw_numerals(cr)?;
        }
        for hand in &self.dial.hands {
            self.draw_hand(cr, hand)?;
        }
        self.draw_pin(cr)
    }

    fn draw_face(&self, cr: &Context) -> Result<(), cairo::Error> {
        cr.arc(0.0, 0.0, self.dial.ring_radius(), 0.0, 2.0 * PI);
        set_color(cr, self.colors.face);
        cr.fill_preserve()?;
        set_color(cr, self.colors.primary);
        cr.set_line_width(self.dial.dial_stroke_width);
        cr.stroke()
    }

    fn draw_tick(&self, cr: &Context, tick: &TickMark) -> Result<(), cairo::Error> {
        cr.save()?;
        cr.rotate(tick.rotation.to_radians());
        set_color(cr, self.colors.color(tick.color));
        cr.set_line_width(tick.width);
        cr.set_line_cap(LineCap::Butt);
        stroke_segment(cr, &self.dial.tick_segment(tick))?;
        cr.restore()
    }

    fn draw_numerals(&self, cr: &Context) -> Result<(), cairo::Error> {
        set_color(cr, self.colors.primary);
        cr.select_font_face(NUMERAL_FONT, FontSlant::Normal, FontWeight::Normal);
        for numeral in &self.dial.numerals {
            self.draw_numeral(cr, numeral)?;
        }
        Ok(())
    }

    fn draw_numeral(&self, cr: &Context, numeral: &Numeral) -> Result<(), cairo::Error> {
        let theta = numeral.rotation.to_radians();
        let label = numeral.label();

        cr.save()?;
        // orbit to the clock position, then undo the turn so the glyph
        // baseline stays horizontal
        cr.rotate(theta);
        cr.translate(0.0, -numeral.radial_offset);
        cr.rotate(-theta);

        cr.set_font_size(numeral.font_size);
        let ext = cr.text_extents(&label)?;
        cr.move_to(
            -ext.width() / 2.0 - ext.x_bearing(),
            -ext.height() / 2.0 - ext.y_bearing(),
        );
        cr.show_text(&label)?;
        cr.restore()
    }

    fn draw_hand(&self, cr: &Context, hand: &HandGeometry) -> Result<(), cairo::Error> {
        cr.save()?;
        cr.rotate(hand.rotation(self.angles).to_radians());
        set_color(cr, self.colors.color(hand.color));
        cr.set_line_width(hand.width);
        cr.set_line_cap(LineCap::Round);
        stroke_segment(cr, &hand.segment())?;
        cr.restore()
    }

    fn draw_pin(&self, cr: &Context) -> Result<(), cairo::Error> {
        set_color(cr, self.colors.primary);
        cr.arc(0.0, 0.0, self.dial.pin_diameter / 2.0, 0.0, 2.0 * PI);
        cr.fill()
    }
}

pub fn draw(cr: &Context, state: &ClockState, colors: &ThemeColors) -> Result<(), cairo::Error> {
    cr.save()?;
    cr.translate(state.center.x, state.center.y);
    DialRenderer::new(&state.dial, &state.angles, colors).draw(cr)?;
    cr.restore()
}
