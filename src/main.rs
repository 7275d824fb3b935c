//! Solar - current weather in the terminal

use std::cell::RefCell;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use solar::action::Action;
use solar::api::WeatherClient;
use solar::components::{
    Component, SearchOverlay, SearchOverlayProps, WeatherDisplay, WeatherDisplayProps,
};
use solar::config::{self, ApiConfig, DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS};
use solar::effect::{Effect, fetch_result_action};
use solar::reducer::reducer;
use solar::state::{AppState, DEFAULT_LOCATION, LOADING_ANIM_TICK_MS};
use solar::{logging, viewport};
use tracing::{info, warn};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_components::centered_rect;
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

/// Current weather for any location (WeatherAPI.com)
#[derive(Parser, Debug)]
#[command(name = "solar")]
#[command(about = "Current weather for any location, in the terminal")]
struct Args {
    /// Location to show first; any text WeatherAPI.com understands
    #[arg(long, short, default_value = DEFAULT_LOCATION)]
    location: String,

    /// WeatherAPI.com API key
    #[arg(long, env = "WEATHERAPI_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// API base URL
    #[arg(long, env = "WEATHERAPI_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Re-fetch the current location every N seconds (off by default)
    #[arg(long, short, value_parser = clap::value_parser!(u64).range(1..))]
    refresh_interval: Option<u64>,

    /// Log file (default: <data dir>/solar/solar.log); filter with RUST_LOG
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum SolarComponentId {
    Display,
    Search,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum SolarContext {
    Main,
    Search,
}

impl EventRoutingState<SolarComponentId, SolarContext> for AppState {
    fn focused(&self) -> Option<SolarComponentId> {
        Some(self.modal().unwrap_or(SolarComponentId::Display))
    }

    /// The search overlay captures all input while open
    fn modal(&self) -> Option<SolarComponentId> {
        self.search_mode.then_some(SolarComponentId::Search)
    }

    fn binding_context(&self, id: SolarComponentId) -> SolarContext {
        match id {
            SolarComponentId::Display => SolarContext::Main,
            SolarComponentId::Search => SolarContext::Search,
        }
    }

    fn default_context(&self) -> SolarContext {
        SolarContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        location,
        api_key,
        api_base,
        timeout_secs,
        refresh_interval,
        log_file,
        debug: debug_args,
    } = Args::parse();

    let log_path = config::log_path(log_file).map_err(io::Error::other)?;
    logging::init(&log_path)?;

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let api_config = ApiConfig::new(api_base, api_key, timeout_secs)
        .map_err(io::Error::other)?;
    let client = WeatherClient::new(api_config).map_err(io::Error::other)?;

    // First layout decision happens at mount; resizes follow via the event bus
    let width = viewport::measure().unwrap_or_else(|e| {
        warn!(error = %e, "could not measure terminal, assuming wide layout");
        viewport::DEFAULT_WIDTH
    });

    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::new(location).with_viewport_width(width))
        })
        .await
        .map_err(debug_error)?;
    info!(location = %state.selected_location, width, "starting");

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    let mut screen = Screen::enter(debug.use_alt_screen())?;
    let result = run_app(
        &mut screen.terminal,
        &debug,
        store,
        client,
        refresh_interval,
        replay_actions,
    )
    .await;
    // Restore the terminal before reporting any run error
    screen.leave()?;

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    info!("exiting");
    Ok(())
}

/// Raw-mode alternate screen, or plain stdout for render-once debug runs
struct Screen {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    alt_screen: bool,
}

impl Screen {
    fn enter(alt_screen: bool) -> io::Result<Self> {
        let mut stdout = io::stdout();
        if alt_screen {
            enable_raw_mode()?;
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            alt_screen,
        })
    }

    fn leave(mut self) -> io::Result<()> {
        if !self.alt_screen {
            return Ok(());
        }
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()
    }
}

/// Wrap component output; `modal` handlers swallow keys they ignore.
fn respond(actions: Vec<Action>, modal: bool) -> HandlerResponse<Action> {
    if actions.is_empty() && !modal {
        return HandlerResponse::ignored();
    }
    HandlerResponse {
        actions,
        consumed: true,
        needs_render: false,
    }
}

struct SolarUi {
    display: WeatherDisplay,
    search: SearchOverlay,
}

impl SolarUi {
    fn new() -> Self {
        Self {
            display: WeatherDisplay,
            search: SearchOverlay::new(),
        }
    }

    fn search_props(state: &AppState, is_focused: bool) -> SearchOverlayProps<'_> {
        SearchOverlayProps {
            query: &state.search_query,
            is_focused,
            on_query_change: Action::SearchQueryChange,
            on_query_submit: Action::SearchQuerySubmit,
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<SolarComponentId>,
    ) {
        event_ctx.set_component_area(SolarComponentId::Display, area);

        let props = WeatherDisplayProps {
            state,
            is_focused: render_ctx.is_focused() && !state.search_mode,
        };
        self.display.render(frame, area, props);

        self.search.set_open(state.search_mode);
        if state.search_mode {
            let modal_area = centered_rect(50, 7, area);
            event_ctx.set_component_area(SolarComponentId::Search, modal_area);
            let props = Self::search_props(state, render_ctx.is_focused());
            self.search.render(frame, area, props);
        } else {
            event_ctx.component_areas.remove(&SolarComponentId::Search);
        }
    }

    fn handle_display_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self
            .display
            .handle_event(event, props)
            .into_iter()
            .collect();
        respond(actions, false)
    }

    fn handle_search_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        self.search.set_open(state.search_mode);
        let props = Self::search_props(state, true);
        let actions: Vec<_> = self.search.handle_event(event, props).into_iter().collect();
        respond(actions, true)
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    client: WeatherClient,
    refresh_interval: Option<u64>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(SolarUi::new()));
    // Handlers registered here live as long as the bus, i.e. this run
    let mut bus: EventBus<AppState, Action, SolarComponentId, SolarContext> = EventBus::new();
    let keybindings: Keybindings<SolarContext> = Keybindings::new();

    let ui_display = Rc::clone(&ui);
    bus.register(SolarComponentId::Display, move |event, state| {
        ui_display
            .borrow_mut()
            .handle_display_event(&event.kind, state)
    });

    let ui_search = Rc::clone(&ui);
    bus.register(SolarComponentId::Search, move |event, state| {
        ui_search
            .borrow_mut()
            .handle_search_event(&event.kind, state)
    });

    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(columns, _) => HandlerResponse::action(Action::UiViewportResize {
            width: viewport::width_for_resize(columns),
        })
        .with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::WeatherFetch),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(LOADING_ANIM_TICK_MS),
                    || Action::Tick,
                );

                if let Some(secs) = refresh_interval {
                    runtime
                        .subscriptions()
                        .interval("refresh", Duration::from_secs(secs), || Action::WeatherFetch);
                }
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, &client),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, client: &WeatherClient) {
    match effect {
        Effect::FetchWeather { seq, location } => {
            let client = client.clone();
            // One task key: a newer fetch replaces one still in flight
            ctx.tasks().spawn("weather", async move {
                fetch_result_action(seq, client.fetch_current(&location).await)
            });
        }
    }
}
