//! Command loop: reads intents, runs requests in the background and redraws
//! after every state change.

use domain_inventory::ProductId;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::client::InventoryClient;
use crate::state::{DashboardState, Event, Intent};
use crate::view::{render, DashboardView};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Load once and return the rendered dashboard
pub async fn render_once(client: &InventoryClient) -> String {
    let state = DashboardState::new().apply(Event::LoadStarted);
    let outcome = load_event(client).await;
    render(&state.apply(outcome))
}

async fn load_event(client: &InventoryClient) -> Event {
    match client.fetch_products().await {
        Ok(products) => Event::Loaded(products),
        Err(e) => {
            warn!(error = %e, "Error loading products");
            Event::LoadFailed(e.load_message())
        }
    }
}

/// Interactive dashboard session.
///
/// Each request runs as its own task and reports back over a channel, so any
/// number of updates can be in flight at once. Responses are applied in the
/// order they arrive.
pub struct Dashboard<W: Write> {
    client: InventoryClient,
    state: DashboardState,
    out: W,
    clear_screen: bool,
    events_tx: mpsc::UnboundedSender<Event>,
    events_rx: mpsc::UnboundedReceiver<Event>,
}

impl<W: Write> Dashboard<W> {
    pub fn new(client: InventoryClient, out: W, clear_screen: bool) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            client,
            state: DashboardState::new(),
            out,
            clear_screen,
            events_tx,
            events_rx,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Run until `q` or end of input. After input ends, requests already
    /// sent are still awaited so their outcome is drawn.
    ///
    /// No input is read while the product list is loading; only the spinner
    /// is on screen then.
    pub async fn run<R>(&mut self, input: R) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut input_open = true;

        self.reload();
        self.draw()?;

        loop {
            if !input_open && !self.state.has_pending() {
                break;
            }

            tokio::select! {
                line = lines.next_line(), if input_open && !self.state.is_loading() => match line? {
                    Some(line) => {
                        if self.handle_line(&line)? {
                            break;
                        }
                    }
                    None => {
                        debug!("Input closed");
                        input_open = false;
                    }
                },
                Some(event) = self.events_rx.recv() => {
                    self.apply(event);
                    self.draw()?;
                }
            }
        }

        info!("Dashboard session ended");
        Ok(())
    }

    /// Returns `true` when the session should end.
    fn handle_line(&mut self, line: &str) -> std::io::Result<bool> {
        if line.trim().is_empty() {
            return Ok(false);
        }

        let intent = match line.parse::<Intent>() {
            Ok(intent) => intent,
            Err(e) => {
                writeln!(self.out, "{}", e)?;
                return Ok(false);
            }
        };

        match intent {
            Intent::Quit => return Ok(true),
            Intent::Reload => self.reload(),
            Intent::Increment(ref id) | Intent::Decrement(ref id) => {
                let Some(new_quantity) = self.state.plan(&intent) else {
                    writeln!(self.out, "Control disabled for product {}", id)?;
                    return Ok(false);
                };
                self.dispatch_update(id.clone(), new_quantity);
            }
        }

        self.draw()?;
        Ok(false)
    }

    fn reload(&mut self) {
        self.apply(Event::LoadStarted);

        let client = self.client.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(load_event(&client).await);
        });
    }

    fn dispatch_update(&mut self, id: ProductId, new_quantity: u64) {
        self.apply(Event::UpdateDispatched(id.clone()));

        let client = self.client.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let event = match client.update_stock(&id, new_quantity).await {
                Ok(product) => Event::UpdateSucceeded(product),
                Err(e) => {
                    warn!(product_id = %id, error = %e, "Error updating stock");
                    Event::UpdateFailed {
                        id,
                        message: e.update_message(),
                    }
                }
            };
            let _ = tx.send(event);
        });
    }

    fn apply(&mut self, event: Event) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(event);
    }

    fn draw(&mut self) -> std::io::Result<()> {
        if self.clear_screen {
            write!(self.out, "{}", CLEAR_SCREEN)?;
        }
        write!(self.out, "{}", DashboardView(&self.state))?;
        self.out.flush()
    }
}
