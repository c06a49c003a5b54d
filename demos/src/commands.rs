// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};
use velograph_catalog::{FrameDefinition, GeometrySpec, SearchPage};
use velograph_client::{CatalogClient, ClientConfig, ClientError, SearchQuery, SearchSession};
use velograph_fit::RiderProfile;
use velograph_frame_svg::{FitTarget, FrameStyle, normalize_color, render_frame_svg};
use velograph_geometry::{FrameProjector, OutputBox};
use velograph_state::{AppState, ComparisonItem, FileStore, SearchForm};

use crate::cli::{
    Cli, Command, CompareCommand, DrawArgs, FitArgs, Filters, PrefsCommand, SearchCommand,
    ShowCommand,
};
use crate::output::{Table, cm, deg, mm, ratio};

pub(crate) fn run(cli: Cli) -> Result<()> {
    let client = CatalogClient::new(ClientConfig::new(cli.api_url.as_str()));
    debug!(
        api = client.config().base_url(),
        state = %cli.state_dir.display(),
        "starting"
    );
    match cli.command {
        Command::Search(cmd) => search(&client, &mut open_state(&cli.state_dir)?, cmd),
        Command::Show(ShowCommand::Definition { id }) => {
            let def = client
                .get_definition(id)
                .with_context(|| format!("fetching definition {id}"))?;
            print_definition(&def);
            Ok(())
        }
        Command::Show(ShowCommand::Spec { id }) => {
            let spec = client
                .get_spec(id)
                .with_context(|| format!("fetching geometry {id}"))?;
            print_spec(&spec);
            Ok(())
        }
        Command::Draw(args) => draw(&client, &args),
        Command::Fit(args) => fit(&client, &args),
        Command::Compare(cmd) => compare(&client, &mut open_state(&cli.state_dir)?, cmd),
        Command::Prefs(cmd) => prefs(&mut open_state(&cli.state_dir)?, cmd),
        Command::Health => {
            client.health().context("backend health probe")?;
            println!("ok: {}", client.config().base_url());
            Ok(())
        }
    }
}

fn open_state(dir: &Path) -> Result<AppState<FileStore>> {
    let store = FileStore::open(dir)
        .with_context(|| format!("opening state directory {}", dir.display()))?;
    Ok(AppState::load(store))
}

fn query_from(filters: &Filters) -> SearchQuery {
    SearchQuery::default()
        .with_filters(filters.category, filters.material)
        .with_page(filters.page, filters.size)
}

fn form_from(filters: &Filters) -> SearchForm {
    SearchForm {
        category: filters.category.map(|c| c.to_string()).unwrap_or_default(),
        material: filters.material.map(|m| m.to_string()).unwrap_or_default(),
        ..SearchForm::default()
    }
}

/// Runs one search through a session, so a failure clears the results and
/// becomes the reported message.
fn run_search<T>(fetch: impl FnOnce() -> Result<SearchPage<T>, ClientError>) -> Result<SearchPage<T>> {
    let mut session = SearchSession::new();
    let token = session.begin();
    session.complete(token, fetch());
    if let Some(message) = session.error() {
        bail!("search failed: {message}");
    }
    Ok(session.into_results())
}

fn search(
    client: &CatalogClient,
    state: &mut AppState<FileStore>,
    cmd: SearchCommand,
) -> Result<()> {
    match cmd {
        SearchCommand::Geometry {
            stack,
            reach,
            filters,
        } => {
            let saved = state.search_form();
            let (Some(stack), Some(reach)) = (
                stack.or_else(|| saved.stack_mm()),
                reach.or_else(|| saved.reach_mm()),
            ) else {
                bail!("--stack and --reach are required (no saved search to reuse)");
            };
            state.set_search_form(SearchForm {
                stack: stack.to_string(),
                reach: reach.to_string(),
                ..form_from(&filters)
            });
            let query = SearchQuery {
                stack: Some(stack),
                reach: Some(reach),
                ..query_from(&filters)
            };
            let page = run_search(|| client.search_geometry(&query))?;
            info!(total = page.total, "geometry search");

            let mut table = Table::new(["id", "bike", "stack", "reach", "S/R", "distance"]);
            for spec in &page.items {
                table.row([
                    spec.id.to_string(),
                    spec.title(),
                    mm(Some(spec.stack_mm)),
                    mm(Some(spec.reach_mm)),
                    ratio(spec.stack_reach_ratio()),
                    format!("{:.1}", spec.distance_to(stack, reach)),
                ]);
            }
            print!("{table}");
            println!(
                "{} of {} closest to stack {stack:.0} / reach {reach:.0}",
                page.items.len(),
                page.total
            );
        }
        SearchCommand::Keyword { query, filters } => {
            state.set_search_form(SearchForm {
                q: query.clone().unwrap_or_default(),
                ..form_from(&filters)
            });
            let search = SearchQuery {
                q: query,
                ..query_from(&filters)
            };
            let page = run_search(|| client.search_keyword(&search))?;
            info!(total = page.total, "keyword search");

            let mut table = Table::new(["id", "brand", "model", "category", "material", "sizes"]);
            for def in &page.items {
                let categories: Vec<_> = def.categories().iter().map(|c| c.as_str()).collect();
                let sizes: Vec<_> = def
                    .geometries
                    .iter()
                    .map(|g| g.size_label.as_str())
                    .collect();
                table.row([
                    def.id.to_string(),
                    def.brand_name.clone(),
                    def.model_name.clone(),
                    categories.join(","),
                    def.material_group().to_string(),
                    sizes.join(" "),
                ]);
            }
            print!("{table}");
            println!("{} of {}", page.items.len(), page.total);
        }
    }
    Ok(())
}

fn print_definition(def: &FrameDefinition) {
    println!("{} {} (#{})", def.brand_name, def.model_name, def.id);
    match (def.year_start, def.year_end) {
        (Some(a), Some(b)) => println!("years: {a}-{b}"),
        (Some(a), None) => println!("years: {a}-"),
        _ => {}
    }
    let categories: Vec<_> = def.categories().iter().map(|c| c.as_str()).collect();
    println!(
        "category: {} | material: {}",
        categories.join(", "),
        def.material_group()
    );

    let mut sizes = Table::new([
        "id", "size", "stack", "reach", "S/R", "ETT", "STA", "HTA", "CS", "WB", "BB drop",
    ]);
    for g in &def.geometries {
        sizes.row([
            g.id.to_string(),
            g.size_label.clone(),
            mm(Some(g.stack_mm)),
            mm(Some(g.reach_mm)),
            ratio(g.stack_reach_ratio()),
            mm(g.top_tube_effective_mm),
            deg(Some(g.seat_tube_angle)),
            deg(Some(g.head_tube_angle)),
            mm(Some(g.chainstay_length_mm)),
            mm(Some(g.wheelbase_mm)),
            mm(Some(g.bb_drop_mm)),
        ]);
    }
    println!();
    print!("{sizes}");

    for group in def.variant_groups() {
        let kit = group
            .build_kit
            .as_ref()
            .map_or("frameset", |k| k.name.as_str());
        println!();
        println!("{kit} ({})", group.sizes().join(" "));
        for v in &group.variants {
            println!(
                "  {:<6} {:<20} {}",
                v.size_label,
                v.color.as_deref().unwrap_or("-"),
                v.sku
            );
        }
    }
}

fn print_spec(spec: &GeometrySpec) {
    println!("{} (#{})", spec.title(), spec.id);
    let rows = [
        ("stack", mm(Some(spec.stack_mm))),
        ("reach", mm(Some(spec.reach_mm))),
        ("stack/reach", ratio(spec.stack_reach_ratio())),
        ("top tube (effective)", mm(spec.top_tube_effective_mm)),
        ("seat tube", mm(spec.seat_tube_length_mm)),
        ("head tube", mm(spec.head_tube_length_mm)),
        ("seat tube angle", deg(Some(spec.seat_tube_angle))),
        ("head tube angle", deg(Some(spec.head_tube_angle))),
        ("chainstay", mm(Some(spec.chainstay_length_mm))),
        ("wheelbase", mm(Some(spec.wheelbase_mm))),
        ("bb drop", mm(Some(spec.bb_drop_mm))),
        ("fork offset", mm(spec.fork_offset_mm)),
        ("trail", mm(spec.trail_mm)),
        ("standover", mm(spec.standover_height_mm)),
    ];
    let mut table = Table::new(["measure", "value"]);
    for (name, value) in rows {
        table.row([name.to_owned(), value]);
    }
    print!("{table}");
}

fn load_spec(client: &CatalogClient, id: Option<u64>, file: Option<&Path>) -> Result<GeometrySpec> {
    match (id, file) {
        (Some(id), _) => client
            .get_spec(id)
            .with_context(|| format!("fetching geometry {id}")),
        (None, Some(path)) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
        }
        (None, None) => bail!("no geometry given"),
    }
}

fn draw(client: &CatalogClient, args: &DrawArgs) -> Result<()> {
    let spec = load_spec(client, args.id, args.file.as_deref())?;
    let wheels = (!args.no_wheels).then(|| spec.wheel_spec());
    let output = OutputBox {
        width: args.width,
        height: args.height,
    };
    let projector = FrameProjector::new(&spec.frame_geometry(), wheels, output);
    debug!(info = ?projector.debug_info(), "projected frame");

    let listed_color = spec
        .products
        .iter()
        .find_map(|p| p.colors.first())
        .map(String::as_str);
    let style = FrameStyle {
        frame_color: normalize_color(args.color.as_deref().or(listed_color)),
        fit_target: args
            .fit_stack
            .zip(args.fit_reach)
            .map(|(stack_mm, reach_mm)| FitTarget { stack_mm, reach_mm }),
        ..FrameStyle::default()
    };
    let svg = render_frame_svg(&projector, &style);
    match &args.output {
        Some(path) => {
            fs::write(path, &svg).with_context(|| format!("writing {}", path.display()))?;
            let size = projector.canvas_size();
            println!(
                "wrote {} ({:.0}x{:.0} px)",
                path.display(),
                size.width,
                size.height
            );
        }
        None => println!("{svg}"),
    }
    Ok(())
}

fn fit(client: &CatalogClient, args: &FitArgs) -> Result<()> {
    let (stack, reach) = match args.spec {
        Some(id) => {
            let spec = client
                .get_spec(id)
                .with_context(|| format!("fetching geometry {id}"))?;
            println!("{}", spec.title());
            (Some(spec.stack_mm), Some(spec.reach_mm))
        }
        None => (args.stack, args.reach),
    };
    let rider = RiderProfile {
        inseam_cm: args.inseam,
        torso_cm: args.torso,
        arm_cm: args.arm,
        style: args.style,
    };
    let report = rider.report(stack, reach);
    match report.saddle {
        Some(s) => println!(
            "saddle height (cm): Hamley {} | LeMond {} | 105% {}",
            cm(Some(s.hamley_cm)),
            cm(Some(s.lemond_cm)),
            cm(Some(s.simple_cm))
        ),
        None => println!("saddle height (cm): -"),
    }
    println!(
        "cockpit reach (cm, {}): {}",
        args.style,
        cm(report.cockpit_reach_cm)
    );
    println!("frame: {}", report.frame);
    Ok(())
}

fn compare(
    client: &CatalogClient,
    state: &mut AppState<FileStore>,
    cmd: CompareCommand,
) -> Result<()> {
    match cmd {
        CompareCommand::Add { id } => {
            if state.comparison().contains(&id) {
                println!("#{id} is already in the comparison");
                return Ok(());
            }
            let spec = client
                .get_spec(id)
                .with_context(|| format!("fetching geometry {id}"))?;
            let item = ComparisonItem::new(spec);
            println!("added {}", item.title);
            state.add_to_comparison(item);
        }
        CompareCommand::Remove { id } => match state.remove_from_comparison(id) {
            Some(item) => println!("removed {}", item.title),
            None => println!("#{id} is not in the comparison"),
        },
        CompareCommand::Clear => {
            if state.clear_comparison() {
                println!("comparison cleared");
            }
        }
        CompareCommand::List => print_comparison(state),
    }
    Ok(())
}

fn print_comparison(state: &AppState<FileStore>) {
    let items = state.comparison().items();
    if items.is_empty() {
        println!("comparison is empty");
        return;
    }
    let mut table = Table::new(
        std::iter::once("measure".to_owned()).chain(items.iter().map(|i| i.title.clone())),
    );
    type Measure = fn(&GeometrySpec) -> String;
    let measures: [(&str, Measure); 11] = [
        ("stack", |g| mm(Some(g.stack_mm))),
        ("reach", |g| mm(Some(g.reach_mm))),
        ("stack/reach", |g| ratio(g.stack_reach_ratio())),
        ("top tube", |g| mm(g.top_tube_effective_mm)),
        ("seat tube", |g| mm(g.seat_tube_length_mm)),
        ("head tube", |g| mm(g.head_tube_length_mm)),
        ("seat angle", |g| deg(Some(g.seat_tube_angle))),
        ("head angle", |g| deg(Some(g.head_tube_angle))),
        ("chainstay", |g| mm(Some(g.chainstay_length_mm))),
        ("wheelbase", |g| mm(Some(g.wheelbase_mm))),
        ("bb drop", |g| mm(Some(g.bb_drop_mm))),
    ];
    for (name, measure) in measures {
        table.row(std::iter::once(name.to_owned()).chain(items.iter().map(|i| measure(&i.geometry))));
    }
    print!("{table}");
}

fn prefs(state: &mut AppState<FileStore>, cmd: PrefsCommand) -> Result<()> {
    match cmd {
        PrefsCommand::Show => {
            println!("theme: {}", state.theme());
            println!("language: {}", state.language());
            println!("comparison: {} item(s)", state.comparison().len());
            let form = state.search_form();
            if !form.is_blank() {
                println!(
                    "last search: q={:?} stack={:?} reach={:?} category={:?} material={:?}",
                    form.q, form.stack, form.reach, form.category, form.material
                );
            }
        }
        PrefsCommand::Theme { choice } => {
            let theme = choice.resolve(state.theme());
            state.set_theme(theme);
            println!("theme: {theme}");
        }
        PrefsCommand::Language { language } => {
            state.set_language(language);
            println!("language: {language}");
        }
    }
    Ok(())
}
