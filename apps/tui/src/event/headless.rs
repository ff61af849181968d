use color_eyre::Result;
use serde::Serialize;
use skill_radar::radar::{
    render_radar, DrawCommand, Point, RadarGeometry, RadarPalette, RecordingSurface, SvgSurface,
};
use skill_radar::{SkillCatalog, SkillCategory, Theme};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct HeadlessOptions {
    pub json: bool,
    pub svg: Option<PathBuf>,
    pub category: SkillCategory,
    pub width: u32,
    pub height: u32,
    pub theme: Theme,
}

/// Run the application in headless mode (no UI)
pub fn run_headless(
    catalog: &SkillCatalog,
    palette: &RadarPalette,
    options: &HeadlessOptions,
) -> Result<()> {
    if let Some(path) = &options.svg {
        let document = render_svg(catalog, palette, options);
        std::fs::write(path, document).map_err(|e| {
            color_eyre::eyre::eyre!("Failed to write SVG to {}: {e}", path.display())
        })?;
        tracing::info!(path = %path.display(), "wrote radar SVG");
    }

    let report = build_report(catalog, palette, options);
    let mut stdout = std::io::stdout().lock();
    if options.json {
        serde_json::to_writer_pretty(&mut stdout, &report)?;
        writeln!(stdout)?;
    } else {
        write_stats(&mut stdout, &report, options)?;
    }

    Ok(())
}

pub fn render_svg(catalog: &SkillCatalog, palette: &RadarPalette, options: &HeadlessOptions) -> String {
    let mut surface = SvgSurface::new(options.width, options.height, palette.background);
    render_radar(catalog.entries(options.category), &mut surface, palette);
    surface.finish()
}

fn build_report(
    catalog: &SkillCatalog,
    palette: &RadarPalette,
    options: &HeadlessOptions,
) -> HeadlessReport {
    let categories = catalog
        .categories()
        .into_iter()
        .map(|category| CategorySummary {
            id: category.as_str(),
            label: category.label(),
            entries: catalog.entries(category).len(),
            average_score: catalog.average_score(category),
        })
        .collect();

    let entries = catalog.entries(options.category);
    let scores: Vec<u8> = entries.iter().map(|entry| entry.score()).collect();
    let geometry = RadarGeometry::compute(&scores, options.width, options.height);

    let axes = geometry
        .as_ref()
        .map(|geometry| {
            geometry
                .axes
                .iter()
                .zip(entries)
                .map(|(axis, entry)| AxisReport {
                    label: entry.label().to_string(),
                    score: entry.score(),
                    angle_degrees: axis.angle.to_degrees(),
                    point: axis.score_point,
                })
                .collect()
        })
        .unwrap_or_default();

    let mut surface = RecordingSurface::new(options.width, options.height);
    render_radar(entries, &mut surface, palette);

    HeadlessReport {
        category: options.category.as_str(),
        theme: options.theme.as_str(),
        width: options.width,
        height: options.height,
        center: geometry.as_ref().map(|geometry| geometry.center),
        radius: geometry.as_ref().map(|geometry| geometry.radius),
        categories,
        axes,
        commands: surface.into_commands(),
    }
}

fn write_stats(
    out: &mut impl Write,
    report: &HeadlessReport,
    options: &HeadlessOptions,
) -> Result<()> {
    writeln!(out, "\nSkills Radar")?;
    writeln!(out, "============")?;
    for summary in &report.categories {
        match summary.average_score {
            Some(average) => writeln!(
                out,
                "- {}: {} skills, average {average:.1}%",
                summary.label, summary.entries
            )?,
            None => writeln!(out, "- {}: no skills", summary.label)?,
        }
    }

    writeln!(
        out,
        "\n{} radar ({}x{}, {} theme)",
        options.category.label(),
        report.width,
        report.height,
        report.theme
    )?;
    match (report.center, report.radius) {
        (Some(center), Some(radius)) => {
            writeln!(out, "Center: ({:.1}, {:.1})", center.x, center.y)?;
            writeln!(out, "Radius: {radius:.1}")?;
        }
        _ => writeln!(out, "Surface has no area; nothing drawn")?,
    }

    for axis in &report.axes {
        writeln!(
            out,
            "- {:<18} {:>3}%  {:>6.1}°  ({:.1}, {:.1})",
            axis.label, axis.score, axis.angle_degrees, axis.point.x, axis.point.y
        )?;
    }
    writeln!(out, "Draw commands: {}", report.commands.len())?;

    Ok(())
}

#[derive(Serialize)]
struct HeadlessReport {
    category: &'static str,
    theme: &'static str,
    width: u32,
    height: u32,
    center: Option<Point>,
    radius: Option<f64>,
    categories: Vec<CategorySummary>,
    axes: Vec<AxisReport>,
    commands: Vec<DrawCommand>,
}

#[derive(Serialize)]
struct CategorySummary {
    id: &'static str,
    label: &'static str,
    entries: usize,
    average_score: Option<f64>,
}

#[derive(Serialize)]
struct AxisReport {
    label: String,
    score: u8,
    angle_degrees: f64,
    point: Point,
}
