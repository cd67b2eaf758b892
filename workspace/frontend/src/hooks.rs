use std::cell::{Cell, RefCell};
use std::rc::Rc;

use common::CashFlowPoint;
use yew::prelude::*;

use crate::error::Result;
use crate::providers::{DashboardDataProvider, ForecastService, GenerationTask};

/// Dataset owned by the dashboard page.
///
/// Starts pending with no points and settles exactly once. A failed load
/// settles to an empty dataset; the failure is only logged.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub loading: bool,
    pub cash_flow: Rc<Vec<CashFlowPoint>>,
}

impl Default for DashboardData {
    fn default() -> Self {
        Self::pending()
    }
}

impl DashboardData {
    pub fn pending() -> Self {
        Self {
            loading: true,
            cash_flow: Rc::new(Vec::new()),
        }
    }

    pub fn settle(result: Result<Vec<CashFlowPoint>>) -> Self {
        let cash_flow = match result {
            Ok(points) => {
                log::debug!("Dashboard data loaded: {} points", points.len());
                points
            }
            Err(err) => {
                log::error!("Failed to fetch dashboard data: {}", err);
                Vec::new()
            }
        };

        Self {
            loading: false,
            cash_flow: Rc::new(cash_flow),
        }
    }
}

/// Loads the dashboard dataset once, on mount.
#[hook]
pub fn use_dashboard_data(provider: Rc<dyn DashboardDataProvider>) -> UseStateHandle<DashboardData> {
    let data = use_state(DashboardData::pending);

    {
        let data = data.clone();
        use_effect_with((), move |_| {
            log::trace!("Starting dashboard data load");
            wasm_bindgen_futures::spawn_local(async move {
                let result = provider.fetch_cash_flow().await;
                data.set(DashboardData::settle(result));
            });
            || ()
        });
    }

    data
}

/// Bookkeeping for at most one in-flight forecast generation.
///
/// Clones share the same slot, so the trigger and the completion callback
/// see the same task.
#[derive(Clone, Default)]
pub struct GenerationSlot {
    task: Rc<RefCell<Option<GenerationTask>>>,
}

impl PartialEq for GenerationSlot {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.task, &other.task)
    }
}

impl GenerationSlot {
    pub fn is_busy(&self) -> bool {
        self.task.borrow().is_some()
    }

    /// Starts a generation unless one is already running.
    ///
    /// `on_settled` fires when the service completes, not when the task is
    /// cancelled. Returns false, without touching the service, when busy.
    pub fn start(&self, service: &dyn ForecastService, on_settled: Callback<()>) -> bool {
        if self.is_busy() {
            return false;
        }

        let completed = Rc::new(Cell::new(false));
        let on_complete = {
            // Weak: dropping the slot must drop, and so cancel, its task.
            let task = Rc::downgrade(&self.task);
            let completed = completed.clone();
            Callback::from(move |_: ()| {
                completed.set(true);
                let finished = match task.upgrade() {
                    Some(task) => {
                        let mut in_flight = task.borrow_mut();
                        in_flight.take()
                    }
                    None => None,
                };
                if let Some(finished) = finished {
                    finished.finish();
                }
                on_settled.emit(());
            })
        };

        let started = service.generate(on_complete);
        if completed.get() {
            // Service finished before handing back its task.
            started.finish();
        } else {
            *self.task.borrow_mut() = Some(started);
        }
        true
    }

    /// Cancels the running generation; false when idle.
    pub fn cancel(&self) -> bool {
        let in_flight = self.task.borrow_mut().take();
        match in_flight {
            Some(task) => {
                task.cancel();
                true
            }
            None => false,
        }
    }
}

/// State and actions of the forecast "generate" button.
#[derive(Clone, PartialEq)]
pub struct ForecastGeneration {
    pub generating: bool,
    pub generate: Callback<()>,
    pub cancel: Callback<()>,
}

/// Drives the idle → busy → idle flag around a [`ForecastService`] call.
///
/// Generating while busy is a no-op. Any in-flight task is cancelled when
/// the owning component unmounts.
#[hook]
pub fn use_forecast_generation(service: Rc<dyn ForecastService>) -> ForecastGeneration {
    let generating = use_state_eq(|| false);
    let slot = use_memo((), |_| GenerationSlot::default());

    let generate = {
        let generating = generating.clone();
        let slot = slot.clone();
        Callback::from(move |_: ()| {
            if slot.is_busy() {
                log::debug!("Forecast generation already running, ignoring trigger");
                return;
            }

            generating.set(true);
            let on_settled = {
                let generating = generating.clone();
                Callback::from(move |_: ()| {
                    log::info!("Forecast generation finished");
                    generating.set(false);
                })
            };
            slot.start(service.as_ref(), on_settled);
        })
    };

    let cancel = {
        let generating = generating.clone();
        let slot = slot.clone();
        Callback::from(move |_: ()| {
            if slot.cancel() {
                generating.set(false);
            }
        })
    };

    {
        let slot = slot.clone();
        use_effect_with((), move |_| {
            move || {
                slot.cancel();
            }
        });
    }

    ForecastGeneration {
        generating: *generating,
        generate,
        cancel,
    }
}
