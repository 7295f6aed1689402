use blockfont::{
    font, line_width, render, render_into, render_to_string,
    test_support::{FailingTarget, GridTarget},
    BannerError, RenderOptions, SizePreset, GLYPH_HEIGHT, GLYPH_WIDTH,
};
use pretty_assertions::assert_eq;

fn glyph_rows(ch: char) -> Vec<String> {
    font::glyph_or_blank(ch)
        .cells()
        .iter()
        .map(|row| row.iter().map(|on| if *on { '#' } else { ' ' }).collect())
        .collect()
}

#[test]
fn hi_matches_stored_glyphs() {
    let options = RenderOptions::default().with_scale(1).with_fill("#").with_spacing(1);
    let lines = render("HI", &options).unwrap();
    assert_eq!(lines.len(), 7);
    let h = glyph_rows('H');
    let i = glyph_rows('I');
    for (r, line) in lines.iter().enumerate() {
        let chars: Vec<char> = line.chars().collect();
        assert_eq!(chars.len(), 11);
        assert_eq!(chars[..5].iter().collect::<String>(), h[r]);
        assert_eq!(chars[5], ' ');
        assert_eq!(chars[6..].iter().collect::<String>(), i[r]);
    }
    assert_eq!(
        lines,
        vec![
            "#   #  ### ",
            "#   #   #  ",
            "#   #   #  ",
            "#####   #  ",
            "#   #   #  ",
            "#   #   #  ",
            "#   #  ### ",
        ]
    );
}

#[test]
fn empty_text_renders_no_lines() {
    assert_eq!(render("", &RenderOptions::default()).unwrap(), Vec::<String>::new());
    assert_eq!(render_to_string("", &RenderOptions::default()).unwrap(), "");
    let mut grid = GridTarget::new();
    render_into(&mut grid, "", &RenderOptions::preset(SizePreset::Huge)).unwrap();
    assert!(grid.lines.is_empty());
}

#[test]
fn line_count_and_width_are_uniform() {
    for scale in 1..=5 {
        for text in ["A", "Hello, World!", "x y z", "~~@@", "0123456789"] {
            let options = RenderOptions::default().with_scale(scale).with_spacing(2);
            let lines = render(text, &options).unwrap();
            assert_eq!(lines.len(), GLYPH_HEIGHT * scale as usize, "{text} @ {scale}");
            let expected = line_width(text, &options);
            for line in &lines {
                assert_eq!(line.chars().count(), expected, "{text} @ {scale}");
            }
        }
    }
}

#[test]
fn rendering_is_deterministic() {
    let options = RenderOptions::preset(SizePreset::Medium).with_fill("█");
    let a = render_to_string("Rust 2024!", &options).unwrap();
    let b = render_to_string("Rust 2024!", &options).unwrap();
    assert_eq!(a, b);
}

#[test]
fn unsupported_chars_render_blank_region() {
    let options = RenderOptions::default().with_scale(3);
    let lines = render("@", &options).unwrap();
    assert_eq!(lines.len(), 21);
    for line in &lines {
        assert_eq!(line, &" ".repeat(15));
    }
}

#[test]
fn width_is_additive() {
    let options = RenderOptions::default().with_scale(2).with_spacing(3);
    let a = render("A", &options).unwrap()[0].chars().count();
    let b = render("B", &options).unwrap()[0].chars().count();
    let ab = render("AB", &options).unwrap()[0].chars().count();
    assert_eq!(ab, a + b + 3);
}

#[test]
fn huge_preset_expands_cells_to_8x8_blocks() {
    let options = RenderOptions::preset(SizePreset::Huge);
    let lines = render("A", &options).unwrap();
    assert_eq!(lines.len(), 56);
    assert!(lines.iter().all(|l| l.chars().count() == 40));

    let glyph = font::glyph_or_blank('A');
    for (y, line) in lines.iter().enumerate() {
        let chars: Vec<char> = line.chars().collect();
        for (x, ch) in chars.iter().enumerate() {
            let expected = if glyph.is_on(y / 8, x / 8) { '#' } else { ' ' };
            assert_eq!(*ch, expected, "cell ({x}, {y})");
        }
    }
}

#[test]
fn lowercase_renders_like_uppercase() {
    let options = RenderOptions::default();
    assert_eq!(render("hello", &options), render("HELLO", &options));
}

#[test]
fn multi_char_fill_keeps_grid_aligned() {
    let options = RenderOptions::default().with_fill("[]").with_spacing(0);
    let lines = render("T", &options).unwrap();
    assert_eq!(lines[0], "[][][][][]");
    assert_eq!(lines[1], "    []    ");
    assert!(lines.iter().all(|l| l.chars().count() == 2 * GLYPH_WIDTH));
}

#[test]
fn spacing_is_counted_in_output_columns() {
    let options = RenderOptions::default().with_fill("[]").with_scale(2).with_spacing(1);
    let lines = render("--", &options).unwrap();
    assert_eq!(lines[6], format!("{} {}", "[]".repeat(10), "[]".repeat(10)));
}

#[test]
fn zero_spacing_butts_glyphs_together() {
    let options = RenderOptions::default().with_spacing(0);
    let lines = render("--", &options).unwrap();
    assert_eq!(lines[3], "##########");
}

#[test]
fn grid_target_sees_spacing_columns_and_hints() {
    let options = RenderOptions::default().with_spacing(2);
    let mut grid = GridTarget::new();
    render_into(&mut grid, "HH", &options).unwrap();
    assert_eq!(grid.lines.len(), 7);
    assert_eq!(grid.column(5), vec![false; 7]);
    assert_eq!(grid.column(6), vec![false; 7]);
    assert_eq!(grid.column(7), vec![true; 7]);
    assert_eq!(grid.width_hints, vec![12; 7]);
}

#[test]
fn invalid_scale_is_reported_before_rendering() {
    let err = render("A", &RenderOptions::default().with_scale(0)).unwrap_err();
    assert_eq!(err, BannerError::InvalidScale(0));
    let err = render("", &RenderOptions::default().with_fill("")).unwrap_err();
    assert_eq!(err, BannerError::EmptyFill);
}

#[test]
fn control_characters_in_fill_are_rejected() {
    for fill in ["#\n", "\r", "a\tb", "\u{1b}[31m#"] {
        let err = render_to_string("A", &RenderOptions::default().with_fill(fill)).unwrap_err();
        assert_eq!(err, BannerError::InvalidFill(fill.to_string()));
    }
}

#[test]
fn target_errors_are_propagated() {
    let err = render_into(&mut FailingTarget, "A", &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, BannerError::Target(_)));
}
