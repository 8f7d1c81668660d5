use facet::{Facet, Peek, Poke};
use hueport_core::reflect::{self, Node};
use hueport_core::traverse_mut;
use hueport_formats::{
    AbstractScheme, Adapter, Color, ConversionReport, ConvertConfig, FormatError, Registry,
    TextFormat, convert, from_abstract, to_abstract,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Canonical scheme with every leaf set to a random value.
fn random_scheme(rng: &mut StdRng) -> AbstractScheme {
    let mut scheme = AbstractScheme::default();
    traverse_mut(Poke::new(&mut scheme), |path, _, value| {
        if !matches!(reflect::node(value.as_peek()), Node::Leaf) {
            return true;
        }
        let (leaf, _) = reflect::unwrap_shape(value.shape());
        if leaf == Color::SHAPE {
            let color = Color::rgb(
                rng.gen_range(0..=255),
                rng.gen_range(0..=255),
                rng.gen_range(0..=255),
            );
            reflect::assign(value, Some(Peek::new(&color)), path).unwrap();
        } else if leaf == String::SHAPE {
            let text = format!("{path}-{}", rng.gen_range(0..1000u32));
            reflect::assign(value, Some(Peek::new(&text)), path).unwrap();
        }
        false
    });
    scheme
}

fn config() -> ConvertConfig {
    ConvertConfig::default()
}

// ---------------------------------------------------------------------------
// Round trips
// ---------------------------------------------------------------------------

#[test]
fn test_every_format_survives_render_and_parse() {
    let registry = Registry::builtin();
    let mut rng = StdRng::seed_from_u64(42);

    for info in registry.formats() {
        for _ in 0..8 {
            let scheme = random_scheme(&mut rng);

            let mut original = registry.create(info.name).unwrap();
            from_abstract(&scheme, original.as_mut(), &config()).unwrap();
            let text = original.render().unwrap();

            let mut reader = registry.create(info.name).unwrap();
            let canonical = to_abstract(&text, reader.as_mut(), &config()).unwrap();
            assert!(canonical.dropped_source.is_empty(), "{}", info.name);

            let mut restored = registry.create(info.name).unwrap();
            from_abstract(&canonical.scheme, restored.as_mut(), &config()).unwrap();
            assert_eq!(
                restored.render().unwrap(),
                text,
                "{} did not round trip",
                info.name
            );
        }
    }
}

#[test]
fn test_all_pairs_convert_without_losing_fields() {
    let registry = Registry::builtin();
    let mut rng = StdRng::seed_from_u64(1234);
    let scheme = random_scheme(&mut rng);

    for from in registry.formats() {
        let mut source = registry.create(from.name).unwrap();
        from_abstract(&scheme, source.as_mut(), &config()).unwrap();
        let input = source.render().unwrap();

        for to in registry.formats() {
            let mut reader = registry.create(from.name).unwrap();
            let mut writer = registry.create(to.name).unwrap();
            let conversion = convert(&input, reader.as_mut(), writer.as_mut(), &config()).unwrap();

            assert!(conversion.report.is_lossless(), "{} -> {}", from.name, to.name);
            assert_eq!(conversion.report.reader, from.name);
            assert_eq!(conversion.report.writer, to.name);
        }
    }
}

#[test]
fn test_shared_colors_cross_formats() {
    let registry = Registry::builtin();
    let input = r##"{
  "name": "Campbell",
  "red": "#C50F1F",
  "background": "#0C0C0C",
  "foreground": "#CCCCCC",
  "cursorColor": "#FFFFFF"
}"##;
    let mut reader = registry.create("wt").unwrap();
    let mut writer = registry.create("gogh").unwrap();
    let conversion = convert(input, reader.as_mut(), writer.as_mut(), &config()).unwrap();

    let mut gogh = registry.create("gogh").unwrap();
    let canonical = to_abstract(&conversion.output, gogh.as_mut(), &config()).unwrap();
    let scheme = canonical.scheme;

    assert_eq!(scheme.metadata.name.as_deref(), Some("Campbell"));
    assert_eq!(scheme.ansi_colors.red, Some(Color::rgb(0xc5, 0x0f, 0x1f)));
    assert_eq!(scheme.special_colors.cursor, Some(Color::rgb(0xff, 0xff, 0xff)));
    // Black and white were filled from background and foreground.
    assert_eq!(scheme.ansi_colors.black, Some(Color::rgb(0x0c, 0x0c, 0x0c)));
    assert_eq!(scheme.ansi_colors.white, Some(Color::rgb(0xcc, 0xcc, 0xcc)));
}

#[test]
fn test_iterm_to_vscode_carries_editor_colors() {
    let registry = Registry::builtin();
    let mut source = registry.create("iterm").unwrap();
    let mut scheme = AbstractScheme::default();
    scheme.special_colors.background = Some(Color::rgb(0x01, 0x16, 0x27));
    scheme.special_colors.find_match = Some(Color::rgb(0x5f, 0x7e, 0x97));
    scheme.ansi_colors.bright_cyan = Some(Color::rgb(0x7f, 0xdb, 0xca));
    from_abstract(&scheme, source.as_mut(), &config()).unwrap();
    let input = source.render().unwrap();

    let mut reader = registry.create("iterm").unwrap();
    let mut writer = registry.create("vscode").unwrap();
    let conversion = convert(&input, reader.as_mut(), writer.as_mut(), &config()).unwrap();

    assert!(conversion.output.contains("\"editor.background\": \"#011627\""));
    assert!(conversion.output.contains("\"editor.findMatchBackground\": \"#5f7e97\""));
    assert!(conversion.output.contains("\"terminal.ansiBrightCyan\": \"#7fdbca\""));
    assert!(conversion.report.is_lossless());
}

#[test]
fn test_scope_colors_reach_only_editor_formats() {
    let registry = Registry::builtin();
    let input = r##"{"colors": {"editor.lineHighlightBackground": "#0b2942"}}"##;
    let mut reader = registry.create("vscode").unwrap();
    let canonical = to_abstract(input, reader.as_mut(), &config()).unwrap();
    assert_eq!(
        canonical.scheme.scope_colors.editor.cursor_line,
        Some(Color::rgb(0x0b, 0x29, 0x42))
    );

    let mut writer = registry.create("gogh").unwrap();
    let summary = from_abstract(&canonical.scheme, writer.as_mut(), &config()).unwrap();
    assert!(summary.unused_destination.is_empty());
    assert!(!writer.render().unwrap().contains("0b2942"));
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn test_malformed_input_names_the_format() {
    let registry = Registry::builtin();
    let mut reader = registry.create("alacritty").unwrap();
    let mut writer = registry.create("base16").unwrap();

    let err = convert("[colors.primary\n", reader.as_mut(), writer.as_mut(), &config())
        .unwrap_err();
    assert!(matches!(err, FormatError::Parse { format: "alacritty", .. }));
}

#[test]
fn test_invalid_color_is_a_parse_error() {
    let mut reader = Registry::builtin().create("gogh").unwrap();
    let err = to_abstract("color_01: '#12'\n", reader.as_mut(), &config()).unwrap_err();
    assert!(err.to_string().starts_with("failed to parse gogh input"));
}

#[test]
fn test_invalid_config_is_rejected_before_parsing() {
    let mut reader = Registry::builtin().create("gogh").unwrap();
    let config = ConvertConfig {
        disabled_fallbacks: vec!["infrared".into()],
        ..ConvertConfig::default()
    };
    let err = to_abstract("name: x\n", reader.as_mut(), &config).unwrap_err();
    assert!(matches!(err, FormatError::InvalidConfig(_)));
}

// ---------------------------------------------------------------------------
// Config and report files
// ---------------------------------------------------------------------------

#[test]
fn test_config_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hueport.yaml");

    let config = ConvertConfig {
        disabled_fallbacks: vec!["white".into(), "black".into()],
        warn_unmapped: false,
        ..ConvertConfig::default()
    };
    config.save(&path).unwrap();

    let loaded = ConvertConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
    assert!(!loaded.is_fallback_enabled("white"));
}

#[test]
fn test_missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ConvertConfig::load(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, FormatError::Io(_)));
}

#[test]
fn test_report_renders_as_yaml() {
    let registry = Registry::builtin();
    let mut reader = registry.create("base16").unwrap();
    let mut writer = registry.create("wt").unwrap();
    let conversion = convert(
        "scheme: Ocean\nauthor: Chris\nbase00: '2b303b'\n",
        reader.as_mut(),
        writer.as_mut(),
        &config(),
    )
    .unwrap();

    let yaml = conversion.report.render(TextFormat::Yaml).unwrap();
    let parsed: ConversionReport = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, conversion.report);
    // Windows Terminal has no author field.
    assert!(parsed.unused_canonical.contains(&"metadata.author".to_string()));
    assert!(parsed.is_lossless());
}
