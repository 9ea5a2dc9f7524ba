use minifb::{Key, Window, WindowOptions};

use crate::field::{BOUNDED, Field};

const BOUNDED_COLOR: u32 = 0xFFFFFF;
// Deep blue for escaped cells so the set reads as a bright silhouette.
const ESCAPED_COLOR: u32 = 0x001020;

/// Show a finished field in a window until Escape is pressed or the
/// window closes. Display only; the field is never recomputed.
pub fn show(field: &Field) {
    let width = field.width();
    let height = field.height();

    // Flip rows so the imaginary axis increases upward, matching the PNG
    // renderer.
    let mut buffer: Vec<u32> = Vec::with_capacity(width * height);
    for row in field.rows().rev() {
        buffer.extend(row.iter().map(|&v| {
            if v == BOUNDED {
                BOUNDED_COLOR
            } else {
                ESCAPED_COLOR
            }
        }));
    }

    let mut window = Window::new(
        &format!("Mandelbrot Field ({width}x{height})"),
        width,
        height,
        WindowOptions::default(),
    )
    .unwrap();

    window.set_target_fps(30);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window.update_with_buffer(&buffer, width, height).unwrap();
    }
}
