use std::path::Path;

use icy_inc::{convert_font_sheet, write_font_directives, FontConverter, FontSheet, IncError, PixelSource, CELL_HEIGHT, CELL_WIDTH, GLYPH_COUNT};
use pretty_assertions::assert_eq;

/// Draws a frame around every glyph cell.
struct BoxSheet {
    width: u32,
}

impl PixelSource for BoxSheet {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        (GLYPH_COUNT * CELL_WIDTH).div_ceil(self.width) * CELL_HEIGHT
    }

    fn get_pixel(&self, x: u32, y: u32) -> u8 {
        let (cx, cy) = (x % CELL_WIDTH, y % CELL_HEIGHT);
        u8::from(cx == 0 || cx == CELL_WIDTH - 1 || cy == 0 || cy == CELL_HEIGHT - 1)
    }
}

fn pattern(glyph: u32, row: u32, bit: u32) -> bool {
    (glyph * 7 + row * 3 + bit) % 5 == 0
}

/// Lays out the glyphs of `pattern` in a sheet of the given width.
fn pattern_sheet(width: u32) -> FontSheet {
    let height = (GLYPH_COUNT * CELL_WIDTH).div_ceil(width) * CELL_HEIGHT;
    let mut pixels = vec![0; (width * height) as usize];
    for glyph in 0..GLYPH_COUNT {
        for row in 0..CELL_HEIGHT {
            for bit in 0..CELL_WIDTH {
                if pattern(glyph, row, bit) {
                    let linear = glyph * CELL_WIDTH + bit;
                    let x = linear % width;
                    let y = linear / width * CELL_HEIGHT + row;
                    pixels[(y * width + x) as usize] = 1;
                }
            }
        }
    }
    FontSheet::new(width, height, pixels).unwrap()
}

fn render(source: &dyn PixelSource) -> String {
    let mut output = Vec::new();
    write_font_directives(&FontConverter::default(), source, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_line_layout() {
    let output = render(&BoxSheet { width: 128 });
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4096);

    for line in lines {
        let data = line.strip_prefix(".byte ").unwrap();
        let (bytes, comment) = data.split_once(" # ").unwrap();
        let bytes: Vec<&str> = bytes.split(", ").collect();
        assert_eq!(bytes.len(), 8);
        assert!(bytes.iter().all(|b| b.len() == 4 && b.starts_with("0x")));

        let (flags, annotation) = comment.split_at(8);
        assert!(flags.chars().all(|c| c == '0' || c == '1'));
        let annotation = annotation.strip_prefix(' ').unwrap();
        assert!(!annotation.is_empty());
    }
}

#[test]
fn test_flags_match_bytes() {
    let output = render(&pattern_sheet(128));
    for line in output.lines() {
        let data = line.strip_prefix(".byte ").unwrap();
        let (bytes, comment) = data.split_once(" # ").unwrap();
        let flags: String = bytes
            .split(", ")
            .map(|b| u8::from_str_radix(b.trim_start_matches("0x"), 16).unwrap() / 15)
            .map(|f| f.to_string())
            .collect();
        assert_eq!(flags, &comment[..8]);
    }
}

#[test]
fn test_box_frame() {
    let output = render(&BoxSheet { width: 128 });
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], ".byte 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F # 11111111 \\0h");
    assert_eq!(
        lines[5 * 256 + b'A' as usize],
        ".byte 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0F # 10000001 A"
    );
    assert_eq!(
        lines[15 * 256 + 255],
        ".byte 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F # 11111111 \\FFh"
    );
}

#[test]
fn test_sheet_layouts_agree() {
    let narrow = render(&pattern_sheet(64));
    assert_eq!(narrow, render(&pattern_sheet(128)));
    assert_eq!(narrow, render(&pattern_sheet(GLYPH_COUNT * CELL_WIDTH)));

    let directives = FontConverter::default().directives(&pattern_sheet(128)).unwrap();
    for directive in directives {
        for bit in 0..CELL_WIDTH {
            let expected = if pattern(directive.glyph() as u32, directive.row() as u32, bit) { 15 } else { 0 };
            assert_eq!(directive.values()[bit as usize], expected);
        }
    }
}

#[test]
fn test_indexed_png_sheet() {
    let (width, height) = (128u32, 256u32);
    let mut data = vec![0u8; (width * height) as usize];
    data[0] = 3;
    // glyph 'A' starts at x 8 of the fifth cell row
    data[(66 * width + 11) as usize] = 15;

    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_palette(vec![0u8; 256 * 3]);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&data).unwrap();
    }

    let sheet = FontSheet::from_bytes(&png_data).unwrap();
    let output = render(&sheet);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], ".byte 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00 # 10000000 \\0h");
    assert_eq!(lines[2 * 256 + 65], ".byte 0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x00, 0x00 # 00010000 A");
    assert_eq!(lines[2 * 256 + 66], ".byte 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00 # 00000000 B");
    assert_eq!(lines[32], ".byte 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00 # 00000000  ");
}

#[test]
fn test_custom_color_index() {
    let converter = FontConverter::new(1).unwrap();
    let directives = converter.directives(&BoxSheet { width: 128 }).unwrap();
    assert_eq!(directives[0].values(), [1; 8]);
    assert_eq!(directives[0].flags(), [1; 8]);
}

#[test]
fn test_unaligned_sheet_width() {
    let sheet = FontSheet::new(100, 400, vec![0; 40_000]).unwrap();
    let err = FontConverter::default().directives(&sheet).unwrap_err();
    assert!(matches!(err, IncError::SheetWidthNotAligned { width: 100, cell_width: 8 }));
}

#[test]
fn test_sheet_too_small() {
    let sheet = FontSheet::new(128, 200, vec![0; 128 * 200]).unwrap();
    let err = FontConverter::default().directives(&sheet).unwrap_err();
    assert!(matches!(err, IncError::SheetTooSmall { required_height: 256, .. }));

    let mut output = Vec::new();
    assert!(write_font_directives(&FontConverter::default(), &sheet, &mut output).is_err());
    assert!(output.is_empty());
}

#[test]
fn test_missing_sheet_writes_nothing() {
    let mut output = Vec::new();
    let err = convert_font_sheet(Path::new("does/not/exist/ibm_font.png"), &FontConverter::default(), &mut output).unwrap_err();
    assert!(matches!(err, IncError::Io(_)));
    assert!(output.is_empty());
}
