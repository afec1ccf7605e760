use super::model::WebState;
use super::{
    BADGE_INNER_ALPHA, BADGE_OUTER_ALPHA, CENTER_DOT, CENTER_DOT_ALPHA, CENTER_DOT_RADIUS,
    CENTER_GLOW_BLUR, CENTER_GLOW_SPREAD, GLOW_ALPHA, ICON_FRACTION, WEB_ALPHA, WEB_ART_RADIUS,
    WEB_FADE_START, WEB_RINGS,
};
use crate::gui::theme::ThemeColors;
use cairo::{Context, RadialGradient};
use gdk_pixbuf::Pixbuf;
use gdk4::prelude::*;
use silk::color::to_rgb_f64;
use silk::layout::{
    GLOW_BLUR, GLOW_SPREAD, Point, SLOT_COUNT, Slot, SlotContent, SlotGeometry, WEB_CENTER,
};
use std::f64::consts::PI;
use std::iter::zip;

type Rgb = (f64, f64, f64);

struct SlotRenderer<'a> {
    slot: &'a Slot,
    icon: Option<&'a Pixbuf>,
    colors: &'a ThemeColors,
}

impl<'a> SlotRenderer<'a> {
    fn new(slot: &'a Slot, icon: Option<&'a Pixbuf>, colors: &'a ThemeColors) -> Self {
        Self { slot, icon, colors }
    }

    fn draw(&self, cr: &Context) -> Result<(), cairo::Error> {
        let color = to_rgb_f64(self.slot.color());
        let geometry = &self.slot.geometry;

        draw_glow(
            cr,
            geometry.center,
            geometry.radius,
            color,
            GLOW_BLUR,
            GLOW_SPREAD,
        )?;
        self.draw_badge(cr, color)?;

        match (&self.slot.content, self.icon) {
            (SlotContent::Filled(_), Some(pixbuf)) => self.draw_icon(cr, pixbuf),
            (SlotContent::Filled(item), None) => {
                self.draw_glyph(cr, &item.initial().to_string(), 18.0)
            }
            (SlotContent::Empty { .. }, _) => self.draw_glyph(cr, "+", 24.0),
        }
    }

    fn draw_badge(&self, cr: &Context, (r, g, b): Rgb) -> Result<(), cairo::Error> {
        let SlotGeometry { center, radius } = self.slot.geometry;
        let gradient = RadialGradient::new(center.x, center.y, 0.0, center.x, center.y, radius);
        gradient.add_color_stop_rgba(0.0, r, g, b, BADGE_INNER_ALPHA);
        gradient.add_color_stop_rgba(1.0, r, g, b, BADGE_OUTER_ALPHA);

        cr.set_source(&gradient)?;
        cr.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
        cr.fill()
    }

    fn draw_icon(&self, cr: &Context, pixbuf: &Pixbuf) -> Result<(), cairo::Error> {
        let geometry = &self.slot.geometry;
        let side = geometry.radius * 2.0 * ICON_FRACTION;
        let icon_scale = side / pixbuf.width().max(pixbuf.height()) as f64;
        let (iw, ih) = (
            pixbuf.width() as f64 * icon_scale,
            pixbuf.height() as f64 * icon_scale,
        );

        cr.save()?;
        cr.translate(geometry.center.x - iw / 2.0, geometry.center.y - ih / 2.0);
        cr.scale(icon_scale, icon_scale);

        // symbolic icons are used as a mask and tinted with the glyph colour
        cr.push_group();
        cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
        cr.paint()?;
        let mask = cr.pop_group()?;
        let (r, g, b, a) = self.colors.glyph.into_components();
        cr.set_source_rgba(r, g, b, a);
        cr.mask(&mask)?;

        cr.restore()
    }

    fn draw_glyph(&self, cr: &Context, text: &str, size: f64) -> Result<(), cairo::Error> {
        let center = self.slot.geometry.center;
        let (r, g, b, a) = self.colors.glyph.into_components();
        cr.set_source_rgba(r, g, b, a);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        cr.set_font_size(size);
        if let Ok(ext) = cr.text_extents(text) {
            cr.move_to(
                center.x - ext.width() / 2.0 - ext.x_bearing(),
                center.y - ext.height() / 2.0 - ext.y_bearing(),
            );
            cr.show_text(text)?;
        }
        Ok(())
    }
}

/// Soft glow around a circle: solid out to `radius + spread`, then fading to
/// nothing over `blur`.
fn draw_glow(
    cr: &Context,
    center: Point,
    radius: f64,
    (r, g, b): Rgb,
    blur: f64,
    spread: f64,
) -> Result<(), cairo::Error> {
    let solid = radius + spread;
    let outer = solid + blur;
    let gradient = RadialGradient::new(center.x, center.y, 0.0, center.x, center.y, outer);
    gradient.add_color_stop_rgba(0.0, r, g, b, GLOW_ALPHA);
    gradient.add_color_stop_rgba(solid / outer, r, g, b, GLOW_ALPHA);
    gradient.add_color_stop_rgba(1.0, r, g, b, 0.0);

    cr.set_source(&gradient)?;
    cr.arc(center.x, center.y, outer, 0.0, 2.0 * PI);
    cr.fill()
}

fn draw_web(cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let (r, g, b, _) = colors.accent.into_components();
    let (cx, cy) = (WEB_CENTER.x, WEB_CENTER.y);
    let fade = RadialGradient::new(cx, cy, 0.0, cx, cy, WEB_ART_RADIUS);
    fade.add_color_stop_rgba(0.0, r, g, b, WEB_ALPHA);
    fade.add_color_stop_rgba(WEB_FADE_START, r, g, b, WEB_ALPHA);
    fade.add_color_stop_rgba(1.0, r, g, b, 0.0);

    let spoke = |i: usize, len: f64| {
        let angle = SlotGeometry::angle(i % SLOT_COUNT);
        (cx + len * angle.cos(), cy + len * angle.sin())
    };

    for i in 0..SLOT_COUNT {
        let (x, y) = spoke(i, WEB_ART_RADIUS);
        cr.move_to(cx, cy);
        cr.line_to(x, y);
    }

    for ring in 1..=WEB_RINGS {
        let len = WEB_ART_RADIUS * ring as f64 / (WEB_RINGS + 1) as f64;
        let (x, y) = spoke(0, len);
        cr.move_to(x, y);
        for i in 1..=SLOT_COUNT {
            let (x, y) = spoke(i, len);
            cr.line_to(x, y);
        }
        cr.close_path();
    }

    cr.set_source(&fade)?;
    cr.set_line_width(1.5);
    cr.stroke()
}

fn draw_center_dot(cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let (r, g, b, _) = colors.accent.into_components();
    draw_glow(
        cr,
        CENTER_DOT,
        CENTER_DOT_RADIUS,
        (r, g, b),
        CENTER_GLOW_BLUR,
        CENTER_GLOW_SPREAD,
    )?;
    cr.set_source_rgba(r, g, b, CENTER_DOT_ALPHA);
    cr.arc(CENTER_DOT.x, CENTER_DOT.y, CENTER_DOT_RADIUS, 0.0, 2.0 * PI);
    cr.fill()
}

/// Draws the web in web coordinates; the caller translates to the canvas.
pub fn draw(cr: &Context, state: &WebState, colors: &ThemeColors) -> Result<(), cairo::Error> {
    draw_web(cr, colors)?;

    for (slot, icon) in zip(state.layout.slots(), &state.icons) {
        SlotRenderer::new(slot, icon.as_ref(), colors).draw(cr)?;
    }

    draw_center_dot(cr, colors)
}
