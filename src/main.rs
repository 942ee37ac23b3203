mod app;
mod config;
mod event;
mod logging;
mod ui;

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Result, bail};
use chrono::Datelike;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use folio::content::ContentStore;
use folio::i18n::Language;
use folio::learning::{self, LearningView, NavigationState};
use folio::learning::markdown;

use app::{App, Focus, Section};
use config::Config;
use event::{AppEvent, EventHandler};
use ui::components::learning_panel::{HEADER_ROWS, LearningPanel};
use ui::components::markdown_view::block_lines;
use ui::components::section::{SectionPanel, section_lines};
use ui::components::sidebar::{NavItem, Sidebar};
use ui::layout::{AppLayout, LayoutTier, max_scroll, wrapped_height};
use ui::theme::Theme;

#[derive(Parser)]
#[command(name = "folio", version, about = "Bilingual terminal portfolio with a learning-notes browser")]
struct Cli {
    #[arg(long, help = "Display language (en, ko)")]
    lang: Option<String>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "List learning categories and topics, then exit")]
    list: bool,

    #[arg(long, value_name = "CATEGORY/TOPIC", help = "Print a learning note as HTML, then exit")]
    render: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(lang) = cli.lang {
        if Language::from_code(&lang).is_none() {
            bail!("unknown language '{lang}', expected en or ko");
        }
        config.language = lang;
        config.normalize_language();
    }
    if let Some(theme) = cli.theme {
        if Theme::load(&theme).is_none() {
            bail!(
                "unknown theme '{theme}', available: {}",
                Theme::available_themes().join(", ")
            );
        }
        config.theme = theme;
    }

    logging::init(&config.log_level);
    tracing::info!(language = %config.language, theme = %config.theme, "folio starting");

    let content: &'static ContentStore = Box::leak(Box::new(ContentStore::load()?));

    if cli.list {
        return print_catalogue(content, config.language());
    }
    if let Some(path) = cli.render {
        return print_topic(content, config.language(), &path);
    }

    let mut app = App::new(config, content)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(250));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = ?err, "application error");
    }
    tracing::info!("folio exited");
    result
}

fn print_catalogue(content: &ContentStore, language: Language) -> Result<()> {
    let mut out = io::stdout().lock();
    for category in &content.catalogue(language).categories {
        writeln!(out, "{}  {}", category.id, category.title)?;
        for topic in &category.topics {
            writeln!(out, "  {}/{}  {}", category.id, topic.id, topic.title)?;
        }
    }
    Ok(())
}

fn print_topic(content: &ContentStore, language: Language, path: &str) -> Result<()> {
    let Some((category_id, topic_id)) = path.split_once('/') else {
        bail!("expected CATEGORY/TOPIC, got '{path}'");
    };
    let (_, topic) = content
        .catalogue(language)
        .find_topic(category_id, topic_id)?;
    println!("{}", markdown::render_html(&topic.content));
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        app.sidebar_visible = LayoutTier::from_area(area).show_sidebar();
        clamp_scroll(app, area);
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick | AppEvent::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Keep scroll offsets within the content drawn into the main panel.
fn clamp_scroll(app: &mut App, area: Rect) {
    let layout = AppLayout::new(area, app.config.sidebar_width);
    let inner_width = layout.main.width.saturating_sub(2);
    let inner_height = layout.main.height.saturating_sub(2);
    let theme = app.theme;
    let colors = &theme.colors;

    if app.section == Section::Learning {
        if let NavigationState::Detail { topic, .. } = app.navigator.state() {
            let lines = block_lines(&markdown::parse(&topic.content), colors);
            let viewport = inner_height.saturating_sub(HEADER_ROWS);
            app.navigator
                .clamp_scroll(max_scroll(wrapped_height(&lines, inner_width), viewport));
        }
    } else {
        let lines = section_lines(app.section, app.profile(), &app.i18n, colors);
        app.scroll = app
            .scroll
            .min(max_scroll(wrapped_height(&lines, inner_width), inner_height));
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Tab => {
            app.toggle_focus();
            return;
        }
        KeyCode::Char('L') => {
            app.toggle_language();
            return;
        }
        KeyCode::Char(ch @ '1'..='8') => {
            if let Some(section) = ch
                .to_digit(10)
                .and_then(|d| Section::from_index(d as usize - 1))
            {
                app.select_section(section);
            }
            return;
        }
        _ => {}
    }

    match app.key_focus() {
        Focus::Sidebar => handle_sidebar_key(app, key),
        Focus::Main if app.section == Section::Learning => handle_learning_key(app, key),
        Focus::Main => handle_section_key(app, key),
    }
}

fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.prev_section(),
        KeyCode::Down | KeyCode::Char('j') => app.next_section(),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => app.focus = Focus::Main,
        _ => {}
    }
}

fn handle_section_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
            app.focus = Focus::Sidebar
        }
        _ => {}
    }
}

fn handle_learning_key(app: &mut App, key: KeyEvent) {
    let in_detail = matches!(app.navigator.state(), NavigationState::Detail { .. });
    match key.code {
        KeyCode::Up | KeyCode::Char('k') if in_detail => app.scroll_up(),
        KeyCode::Down | KeyCode::Char('j') if in_detail => app.scroll_down(),
        KeyCode::Up | KeyCode::Char('k') => app.navigator.cursor_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.navigator.cursor_next(),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => app.navigator.activate(),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
            app.learning_back()
        }
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let layout = AppLayout::new(area, app.config.sidebar_width);
    let main_focused = app.key_focus() == Focus::Main;

    if let Some(sidebar_area) = layout.sidebar {
        let profile = app.profile();
        let sidebar = Sidebar {
            name: &profile.name,
            role: app.i18n.translate("hero.role"),
            items: Section::ALL
                .iter()
                .enumerate()
                .filter_map(|(i, section)| {
                    Some(NavItem {
                        key: char::from_digit(i as u32 + 1, 10)?,
                        label: app.i18n.translate(section.nav_key()),
                    })
                })
                .collect(),
            selected: app.section.index(),
            language_marker: app.language().marker(),
            contact: &profile.contact,
            focused: app.focus == Focus::Sidebar,
            theme: app.theme,
        };
        frame.render_widget(&sidebar, sidebar_area);
    }

    let title = app.i18n.translate(app.section.title_key());
    if app.section == Section::Learning {
        let view: LearningView = learning::render(&app.navigator, &app.i18n);
        frame.render_widget(
            LearningPanel::new(&view, title, main_focused, app.theme),
            layout.main,
        );
    } else {
        frame.render_widget(
            SectionPanel {
                section: app.section,
                title,
                profile: app.profile(),
                i18n: &app.i18n,
                scroll: app.scroll,
                focused: main_focused,
                theme: app.theme,
            },
            layout.main,
        );
    }

    render_footer(app, layout.footer, frame.buffer_mut());
}

fn render_footer(app: &App, area: Rect, buf: &mut ratatui::buffer::Buffer) {
    let colors = &app.theme.colors;
    let year = chrono::Local::now().year().to_string();
    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", app.i18n.translate("footer.hints")),
            Style::default().fg(colors.header_fg()).bg(colors.header_bg()),
        )),
        Line::from(Span::styled(
            format!(
                " {}",
                app.i18n
                    .translate_with("footer.copyright", &[("year", year.as_str())])
            ),
            Style::default()
                .fg(colors.text_dim())
                .add_modifier(Modifier::ITALIC),
        )),
    ];
    Paragraph::new(lines)
        .style(Style::default().bg(colors.bg()))
        .render(area, buf);
}
