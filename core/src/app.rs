//! The host that ties routes, views and the transport together.
//!
//! # Design
//! `App` plays the part of the browser: it keeps the history, mounts the
//! view for the current route, and runs an event loop over the requests the
//! views hand it. Requests are queued with the generation of the view that
//! issued them. Navigating bumps the generation, so a response that arrives
//! after its view was torn down is still executed but never delivered.

use std::collections::VecDeque;

use crate::client::EmployeeClient;
use crate::config::ClientConfig;
use crate::report::Reporter;
use crate::router::{History, Navigator, Route};
use crate::transport::Transport;
use crate::types::EmployeeId;
use crate::validation::Field;
use crate::view::{FormMode, FormPage, FormView, ListPage, ListView, Pending};

/// User interactions the pages expose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddEmployee,
    EditEmployee(EmployeeId),
    DeleteEmployee(EmployeeId),
    SetField(Field, String),
    Submit,
}

/// What is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    List(ListPage),
    Form(FormPage),
    /// No route matched.
    Blank,
}

#[derive(Debug)]
enum View {
    List(ListView),
    Form(FormView),
}

impl View {
    fn unmount(&mut self) {
        match self {
            View::List(list) => list.unmount(),
            View::Form(form) => form.unmount(),
        }
    }
}

#[derive(Debug)]
struct Queued {
    generation: u64,
    pending: Pending,
}

pub struct App<T, R> {
    client: EmployeeClient,
    transport: T,
    reporter: R,
    history: History,
    view: Option<View>,
    generation: u64,
    queue: VecDeque<Queued>,
}

impl<T: Transport, R: Reporter> App<T, R> {
    pub fn new(config: &ClientConfig, transport: T, reporter: R) -> Self {
        Self {
            client: EmployeeClient::new(&config.base_url),
            transport,
            reporter,
            history: History::new(),
            view: None,
            generation: 0,
            queue: VecDeque::new(),
        }
    }

    /// Navigate to `path`, as if typed into the address bar.
    pub fn open(&mut self, path: &str) {
        self.history.navigate(path);
        self.follow_navigation();
    }

    pub fn dispatch(&mut self, action: Action) {
        match (&mut self.view, action) {
            (Some(View::List(list)), Action::AddEmployee) => list.add(&mut self.history),
            (Some(View::List(list)), Action::EditEmployee(id)) => list.edit(id, &mut self.history),
            (Some(View::List(list)), Action::DeleteEmployee(id)) => {
                let pending = list.delete(id);
                self.queue.push_back(Queued {
                    generation: self.generation,
                    pending,
                });
            }
            (Some(View::Form(form)), Action::SetField(field, value)) => form.set_field(field, value),
            (Some(View::Form(form)), Action::Submit) => {
                if let Some(pending) = form.submit(&self.reporter) {
                    self.queue.push_back(Queued {
                        generation: self.generation,
                        pending,
                    });
                }
            }
            (_, action) => log::debug!("{action:?} does not apply to the current page"),
        }
        self.follow_navigation();
    }

    /// Execute the oldest queued request and deliver its outcome. Returns
    /// `false` when there was nothing to do.
    pub fn step(&mut self) -> bool {
        let Some(Queued {
            generation,
            pending,
        }) = self.queue.pop_front()
        else {
            return false;
        };

        let outcome = self.transport.execute(pending.request);
        if generation != self.generation {
            log::debug!("dropping completion of {:?} for an unmounted view", pending.ticket);
            return true;
        }

        let follow_up = match self.view.as_mut() {
            Some(View::List(list)) => list.on_response(pending.ticket, outcome, &self.reporter),
            Some(View::Form(form)) => {
                form.on_response(pending.ticket, outcome, &mut self.history, &self.reporter);
                None
            }
            None => None,
        };
        if let Some(pending) = follow_up {
            self.enqueue(pending);
        }
        self.follow_navigation();
        true
    }

    pub fn run_until_idle(&mut self) {
        while self.step() {}
    }

    pub fn page(&self) -> Page {
        match &self.view {
            Some(View::List(list)) => Page::List(list.page()),
            Some(View::Form(form)) => Page::Form(form.page()),
            None => Page::Blank,
        }
    }

    pub fn current_path(&self) -> Option<&str> {
        self.history.current()
    }

    pub fn queued_requests(&self) -> usize {
        self.queue.len()
    }

    fn enqueue(&mut self, pending: Pending) {
        self.queue.push_back(Queued {
            generation: self.generation,
            pending,
        });
    }

    fn follow_navigation(&mut self) {
        while let Some(path) = self.history.take_pending() {
            self.mount(&path);
        }
    }

    fn mount(&mut self, path: &str) {
        if let Some(view) = self.view.as_mut() {
            view.unmount();
        }
        self.generation += 1;

        let (view, pending) = match Route::parse(path) {
            Some(Route::EmployeeList) => {
                let mut list = ListView::new(self.client.clone());
                let pending = list.mount();
                (Some(View::List(list)), Some(pending))
            }
            Some(Route::AddEmployee) => {
                let form = FormView::new(self.client.clone(), FormMode::Create);
                (Some(View::Form(form)), None)
            }
            Some(Route::EditEmployee(id)) => {
                let mut form = FormView::new(self.client.clone(), FormMode::Edit(id));
                let pending = form.mount();
                (Some(View::Form(form)), pending)
            }
            None => {
                log::warn!("no route matches {path}");
                (None, None)
            }
        };
        self.view = view;
        if let Some(pending) = pending {
            self.enqueue(pending);
        }
    }
}
