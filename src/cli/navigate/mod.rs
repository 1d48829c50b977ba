//! Navigate command - feeds sidebar clicks through the navigation guard

use clap::Args;
use tracing::info;

use crate::domain::navigation::{
    sidebar_items, NavigationGuard, Notifier, SessionState, View, ViewRenderer,
};
use crate::infrastructure::navigation::{ConsoleNotifier, ConsoleRenderer, SessionFlag};

/// Arguments for the navigate command
#[derive(Args, Clone)]
pub struct NavigateArgs {
    /// View shown before the first request
    #[arg(long, default_value = "dashboard")]
    pub from: View,

    /// Treat a focus session as running
    #[arg(long)]
    pub session_active: bool,

    /// End the focus session after this many requests
    #[arg(long, value_name = "N", requires = "session_active")]
    pub end_session_after: Option<usize>,

    /// Print the sidebar after processing the requests
    #[arg(long)]
    pub sidebar: bool,

    /// Views to request, in order
    #[arg(required = true)]
    pub views: Vec<View>,
}

/// Run the navigation simulation
pub fn run(args: NavigateArgs) -> anyhow::Result<()> {
    super::bootstrap();

    let session = SessionFlag::default();
    if args.session_active {
        session.start();
    }

    let mut guard = NavigationGuard::new(
        args.from,
        session.clone(),
        ConsoleNotifier::stdout(),
        ConsoleRenderer::stdout(),
    );

    let committed = replay(&mut guard, &session, &args.views, args.end_session_after);

    info!(
        "Processed {} navigation requests ({} committed), active view: {}",
        args.views.len(),
        committed,
        guard.active_view()
    );

    if args.sidebar {
        for item in sidebar_items(guard.active_view(), session.is_session_active()) {
            let marker = match (item.disabled, item.active) {
                (true, _) => "-",
                (false, true) => "*",
                (false, false) => " ",
            };
            println!("{} {}", marker, item.label);
        }
    }

    Ok(())
}

/// Feed `views` through the guard, stopping the session once `end_session_after`
/// requests have been handled. Returns the number of committed requests.
fn replay<N, R>(
    guard: &mut NavigationGuard<SessionFlag, N, R>,
    session: &SessionFlag,
    views: &[View],
    end_session_after: Option<usize>,
) -> usize
where
    N: Notifier,
    R: ViewRenderer,
{
    let mut committed = 0;
    for (handled, view) in views.iter().enumerate() {
        if end_session_after == Some(handled) {
            session.stop();
            info!("Focus session ended after {} requests", handled);
        }
        if guard.request(*view).is_committed() {
            committed += 1;
        }
    }
    committed
}
