use cairo::{Context, Operator, RadialGradient};
use silk::color::{Rgb, hex, to_rgb_f64};
use silk::particles::{PARTICLE_ALPHA, Particle};
use std::f64::consts::PI;

struct Glow {
    /// Alignment in [-1, 1] per axis, may reach past the edges.
    align: (f64, f64),
    color: Rgb,
}

const GLOWS: [Glow; 2] = [
    Glow {
        align: (1.3, -1.0),
        color: hex(0xAD1457),
    },
    Glow {
        align: (-1.3, 1.0),
        color: hex(0x1A237E),
    },
];
const GLOW_ALPHA: f64 = 0.7;
const GLOW_RADIUS: f64 = 1.5; // fraction of the shorter side
const GLOW_STOP: f64 = 0.1;

fn draw_glow(cr: &Context, width: f64, height: f64, glow: &Glow) -> Result<(), cairo::Error> {
    let (cx, cy) = (
        width / 2.0 * (1.0 + glow.align.0),
        height / 2.0 * (1.0 + glow.align.1),
    );
    let radius = GLOW_RADIUS * width.min(height);
    let (r, g, b) = to_rgb_f64(glow.color);

    let gradient = RadialGradient::new(cx, cy, 0.0, cx, cy, radius);
    gradient.add_color_stop_rgba(0.0, r, g, b, GLOW_ALPHA);
    gradient.add_color_stop_rgba(GLOW_STOP, r, g, b, GLOW_ALPHA);
    gradient.add_color_stop_rgba(1.0, r, g, b, 0.0);

    cr.set_source(&gradient)?;
    cr.paint()
}

/// Paints the black backdrop, its two colour washes and the particles
/// (additively blended) over the whole area.
pub fn draw(
    cr: &Context,
    width: f64,
    height: f64,
    particles: &[Particle],
) -> Result<(), cairo::Error> {
    cr.set_source_rgb(0.0, 0.0, 0.0);
    cr.paint()?;

    for glow in &GLOWS {
        draw_glow(cr, width, height, glow)?;
    }

    cr.save()?;
    cr.set_operator(Operator::Add);
    for p in particles {
        let (r, g, b) = to_rgb_f64(p.color);
        cr.set_source_rgba(r, g, b, PARTICLE_ALPHA);
        cr.arc(p.x * width, p.y * height, p.radius, 0.0, 2.0 * PI);
        cr.fill()?;
    }
    cr.restore()
}
