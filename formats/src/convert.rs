//! The two-phase conversion pipeline.
//!
//! Text is parsed by the reader adapter, mapped into a fresh
//! [`AbstractScheme`], gap-filled from the fallback groups, mapped out into the
//! writer adapter and rendered. Fields that cannot be carried across are
//! logged and collected in the [`ConversionReport`]; they never fail the run.
//!
//! Only color and text leaves count as lost. A struct that has no
//! counterpart of its own (Alacritty's `colors` table, say) is logged but
//! not collected, since its leaves are judged one by one.

use facet::{Peek, Poke};
use hueport_core::reflect::{self, Node};
use hueport_core::{FieldPath, GroupFill, MapSummary, fill_fallbacks, map_from, map_into, traverse};
use tracing::{debug, info, warn};

use crate::adapter::Adapter;
use crate::config::ConvertConfig;
use crate::error::Result;
use crate::report::ConversionReport;
use crate::scheme::{AbstractScheme, FALLBACK_GROUPS};

/// Rendered output and its report.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub output: String,
    pub report: ConversionReport,
}

/// A scheme lifted into canonical form.
#[derive(Debug, Clone)]
pub struct Canonical {
    pub scheme: AbstractScheme,
    /// Source leaves with no canonical counterpart.
    pub dropped_source: Vec<FieldPath>,
    /// Canonical fields no source field maps to.
    pub unfilled: Vec<FieldPath>,
    pub fallback_fills: Vec<GroupFill>,
}

/// Parses `input` with `reader` and maps it into an [`AbstractScheme`],
/// filling fallback groups unless disabled.
pub fn to_abstract(input: &str, reader: &mut dyn Adapter, config: &ConvertConfig) -> Result<Canonical> {
    config.validate()?;
    reader.parse(input)?;
    let format = reader.name();

    let mut scheme = AbstractScheme::default();
    let mut dropped_source = Vec::new();
    let summary = map_into(
        reader.peek(),
        Poke::new(&mut scheme),
        |path, value| {
            debug!(format, path = %path, "source field has no canonical counterpart");
            if is_leaf(value) {
                dropped_source.push(path.clone());
            }
        },
        |path, _| debug!(format, path = %path, "canonical field not provided"),
        &config.tag_key,
    )?;

    let fallback_fills = if config.fill_fallbacks {
        let enabled = FALLBACK_GROUPS
            .iter()
            .filter(|group| config.is_fallback_enabled(group.name));
        fill_fallbacks(&mut scheme, enabled)
    } else {
        Vec::new()
    };

    Ok(Canonical {
        scheme,
        dropped_source,
        unfilled: summary.unused_destination,
        fallback_fills,
    })
}

/// Maps a canonical scheme into `writer`.
///
/// The summary's `unused_destination` holds destination leaves only.
pub fn from_abstract(
    scheme: &AbstractScheme,
    writer: &mut dyn Adapter,
    config: &ConvertConfig,
) -> Result<MapSummary> {
    let format = writer.name();
    let warn_unmapped = config.warn_unmapped;
    let mut unmapped = Vec::new();
    let mut summary = map_from(
        Peek::new(scheme),
        writer.poke(),
        |path, _| debug!(format, path = %path, "canonical field unused by destination"),
        |path, value| {
            if !is_leaf(value) {
                debug!(format, path = %path, "destination table has no canonical counterpart");
                return;
            }
            if warn_unmapped {
                warn!(format, path = %path, "destination field left unmapped");
            } else {
                debug!(format, path = %path, "destination field left unmapped");
            }
            unmapped.push(path.clone());
        },
        &config.tag_key,
    )?;
    summary.unused_destination = unmapped;
    Ok(summary)
}

/// Converts `input` from the reader's format to the writer's.
///
/// # Examples
///
/// ```
/// use hueport_formats::{ConvertConfig, Registry, convert};
///
/// let registry = Registry::builtin();
/// let mut reader = registry.create("gogh").unwrap();
/// let mut writer = registry.create("wt").unwrap();
///
/// let input = "name: Dracula\ncolor_01: '#282a36'\nforeground: '#f8f8f2'\n";
/// let conversion = convert(input, reader.as_mut(), writer.as_mut(), &ConvertConfig::default())
///     .unwrap();
///
/// assert!(conversion.output.contains("\"name\": \"Dracula\""));
/// // `background` was filled from ANSI black.
/// assert!(conversion.output.contains("\"background\": \"#282a36\""));
/// assert!(conversion.report.filled_count() > 0);
/// ```
pub fn convert(
    input: &str,
    reader: &mut dyn Adapter,
    writer: &mut dyn Adapter,
    config: &ConvertConfig,
) -> Result<Conversion> {
    info!(from = reader.name(), to = writer.name(), "converting scheme");

    let canonical = to_abstract(input, reader, config)?;
    let summary = from_abstract(&canonical.scheme, writer, config)?;
    let output = writer.render()?;

    let mut report = ConversionReport::new(reader.name(), writer.name());
    report.dropped_source = dotted(&canonical.dropped_source);
    report.unused_canonical = dotted(&summary.unused_source);
    report.unmapped_destination = dotted(&summary.unused_destination);
    report.absent_destination = absent_leaves(writer.peek());
    report.fallback_fills = canonical.fallback_fills.into_iter().map(Into::into).collect();

    info!(
        dropped = report.dropped_source.len(),
        unmapped = report.unmapped_destination.len(),
        filled = report.filled_count(),
        "conversion finished"
    );
    Ok(Conversion { output, report })
}

fn dotted(paths: &[FieldPath]) -> Vec<String> {
    paths.iter().map(ToString::to_string).collect()
}

fn is_leaf(value: Peek<'_, '_>) -> bool {
    matches!(reflect::node(value), Node::Leaf)
}

fn absent_leaves(root: Peek<'_, '_>) -> Vec<String> {
    let mut absent = Vec::new();
    traverse(root, |path, _, value| {
        if is_leaf(value) && !reflect::is_present(value) {
            absent.push(path.to_string());
        }
        true
    });
    absent
}
