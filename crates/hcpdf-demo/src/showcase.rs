//! The showcase pages.
//!
//! Each page exercises one family of elements on a titled landscape A4
//! sheet, except the page-setup pages which vary size and orientation.

use std::sync::Arc;

use hcpdf::prelude::*;
use hcpdf::{FontMetrics, Span, horizontal_split_spaced, vertical_flow_spaced};

const TITLE_SIZE: f32 = 24.0;
const LABEL_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 12.0;

/// A named page ready to render.
pub struct ShowcasePage {
    pub name: &'static str,
    pub page: Page,
    pub element: Box<dyn Element>,
}

impl std::fmt::Debug for ShowcasePage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShowcasePage")
            .field("name", &self.name)
            .field("page", &self.page)
            .finish_non_exhaustive()
    }
}

/// Every showcase page, in print order.
pub fn pages() -> Result<Vec<ShowcasePage>> {
    let mut pages = vec![
        sequential("split", "Split layout", Layout::split_spaced(10.0)?)?,
        sequential("flow", "Flow layout", Layout::flow_spaced(10.0)?)?,
        sequential("stretch", "Stretch layout", Layout::stretch_spaced(10.0)?)?,
        border()?,
        grid()?,
        table()?,
        line_borders()?,
        text()?,
    ];
    pages.extend(page_setup()?);
    Ok(pages)
}

// ===== Helpers =====

fn courier() -> Arc<dyn FontMetrics> {
    Arc::new(MonospaceMetrics::courier())
}

fn style(size: f32) -> Result<Style> {
    Ok(Style::black(courier(), size)?)
}

/// A bordered box with a padded label, shareable between containers.
fn label(text: &str, fill: Color) -> Result<Arc<dyn Element>> {
    let caption = Padding::symmetric(Text::new(text, style(LABEL_SIZE)?), 20.0, 10.0)?;
    Ok(Arc::new(Stack::new(vec![
        Area::bordered(fill, Color::BLACK).boxed(),
        caption.boxed(),
    ])))
}

fn titled(name: &'static str, title: &str, content: impl Element + 'static) -> Result<ShowcasePage> {
    let body = BorderContainer::builder()
        .top(Text::new(title, style(TITLE_SIZE)?))
        .center(content)
        .top_spacing(30.0)
        .build()?;
    Ok(ShowcasePage {
        name,
        page: Page::landscape(PageSize::A4),
        element: Padding::all(body, 50.0)?.boxed(),
    })
}

// ===== Pages =====

/// The same three boxes along both axes of one layout.
fn sequential(name: &'static str, title: &str, layout: Layout) -> Result<ShowcasePage> {
    let a = label("a", Color::PINK)?;
    let b = label("bb", Color::ORANGE)?;
    let c = label("ccc", Color::CYAN)?;
    let across = SequentialContainer::horizontal(
        layout,
        vec![a.clone().boxed(), b.clone().boxed(), c.clone().boxed()],
    );
    let down = SequentialContainer::vertical(layout, vec![a.boxed(), b.boxed(), c.boxed()]);
    let content = horizontal_split_spaced(20.0, vec![across.boxed(), down.boxed()])?;
    titled(name, title, content)
}

fn border() -> Result<ShowcasePage> {
    let container = BorderContainer::builder()
        .top(label("top", Color::PINK)?)
        .bottom(label("bottom", Color::PINK)?)
        .left(label("left", Color::ORANGE)?)
        .right(label("right", Color::ORANGE)?)
        .center(label("center", Color::CYAN)?)
        .all_spacings(10.0)
        .build()?;
    titled("border", "Border container", container)
}

fn grid() -> Result<ShowcasePage> {
    let fills = [Color::PINK, Color::ORANGE, Color::CYAN];
    let rows = (0..3)
        .map(|row| {
            (0..3)
                .map(|column| {
                    let text = format!("{row},{column}");
                    label(&text, fills[(row + column) % fills.len()]).map(Element::boxed)
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;
    let container = GridContainer::new(
        Layout::stretch_spaced(10.0)?,
        Layout::flow_spaced(10.0)?,
        rows,
    )?;
    titled("grid", "Grid container", container)
}

fn table() -> Result<ShowcasePage> {
    let container = TableContainer::builder_with(
        Layout::stretch_spaced(5.0)?,
        Layout::flow_spaced(5.0)?,
    )
    .distribution_policy(SpanPolicy::Proportional)
    .spanning(label("quarterly report", Color::LIGHT_GRAY)?, 0, 0, 4, 1)
    .position(label("notes", Color::PINK)?, 0, 1, Span::Tracks(1), Span::Remaining)
    .cell(label("q1", Color::ORANGE)?, 1, 1)
    .cell(label("q2", Color::ORANGE)?, 2, 1)
    .cell(label("q3", Color::ORANGE)?, 3, 1)
    .spanning(label("first half", Color::CYAN)?, 1, 2, 2, 1)
    .cell(label("q3 only", Color::CYAN)?, 3, 2)
    .build()?;
    titled("table", "Table container", container)
}

fn line_borders() -> Result<ShowcasePage> {
    let nested = LineBorder::new(
        LineBorder::new(
            LineBorder::new(Area::filled(Color::WHITE), 25.0, Color::BLUE)?,
            25.0,
            Color::GREEN,
        )?,
        25.0,
        Color::RED,
    )?;
    let edges = horizontal_split_spaced(
        10.0,
        vec![
            Area::outline(Color::BLACK, Edges::TOP).boxed(),
            Area::outline(Color::BLACK, Edges::HORIZONTAL).boxed(),
            Area::outline(Color::BLACK, Edges::VERTICAL).boxed(),
            Area::outline(Color::BLACK, Edges::ALL).boxed(),
        ],
    )?;
    let content = horizontal_split_spaced(
        20.0,
        vec![
            nested.boxed(),
            LineBorder::thin(Padding::all(edges, 10.0)?).boxed(),
        ],
    )?;
    titled("line-borders", "Line borders", content)
}

fn text() -> Result<ShowcasePage> {
    let body = style(BODY_SIZE)?;
    let verse = "Boxes inside boxes,\nmeasured from the leaves,\npainted from the root.";
    let content = vertical_flow_spaced(
        20.0,
        vec![
            MultilineText::new(verse, body.clone()).boxed(),
            MultilineText::with_options(verse, body.clone(), 1.5, HorizontalAlignment::Center)?
                .boxed(),
            MultilineText::new(verse, body.clone())
                .with_alignment(HorizontalAlignment::Right)
                .boxed(),
            LineBorder::thin(SideText::new("sideways", body)).boxed(),
        ],
    )?;
    titled("text", "Text elements", content)
}

/// One page per size and orientation, each describing itself.
fn page_setup() -> Result<Vec<ShowcasePage>> {
    let setups = [
        ("setup-a4-portrait", "A4", Page::portrait(PageSize::A4)),
        ("setup-a4-landscape", "A4", Page::landscape(PageSize::A4)),
        ("setup-letter-portrait", "Letter", Page::portrait(PageSize::LETTER)),
        ("setup-a5-landscape", "A5", Page::landscape(PageSize::A5)),
    ];
    setups
        .into_iter()
        .map(|(name, paper, page)| -> Result<ShowcasePage> {
            let area = page.content_area();
            let description = format!(
                "{paper}\n{:?}\n{} x {} pt",
                page.orientation(),
                area.width,
                area.height,
            );
            let text = MultilineText::with_options(
                description,
                style(TITLE_SIZE)?,
                1.2,
                HorizontalAlignment::Center,
            )?;
            let frame = LineBorder::thin(Aligned::new(text, Alignment::Center));
            Ok(ShowcasePage {
                name,
                page,
                element: Padding::all(frame, 36.0)?.boxed(),
            })
        })
        .collect()
}
