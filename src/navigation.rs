//! Navigation state machine.
//!
//! The controller owns the active view plus the session state (NG level, last
//! query, last search results). User intents produce ticketed [`Command`]s;
//! the runtime executes them and feeds each [`Completion`] back through
//! [`NavigationController::complete`]. Every view change other than `back`
//! happens there, so transitions are testable without a terminal or network.
//!
//! Each request belongs to a logical [`Slot`]. Only the most recently issued
//! ticket of a slot may apply its completion; anything older is dropped.

use std::collections::HashSet;

use crate::{
    encounter::{
        EncounterRecord, EnemyStub, LocationVariant, NgLevel, ProgressStats, RegionSummary,
    },
    error::ApiError,
    progress::ProgressTracker,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum View {
    #[default]
    Landing,
    SearchResults {
        results: Vec<EnemyStub>,
    },
    RegionChoice {
        region: String,
    },
    RegionEnemies {
        region: String,
        members: Vec<EnemyStub>,
    },
    EnemyDetail {
        record: Box<EncounterRecord>,
        origin: DetailOrigin,
    },
    NoResults {
        query: String,
    },
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Landing => "Landing",
            View::SearchResults { .. } => "SearchResults",
            View::RegionChoice { .. } => "RegionChoice",
            View::RegionEnemies { .. } => "RegionEnemies",
            View::EnemyDetail { .. } => "EnemyDetail",
            View::NoResults { .. } => "NoResults",
        }
    }
}

/// Where the record on the detail view came from, so refreshes hit the same endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailOrigin {
    Enemy,
    RegionAverage { region: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Search(String),
    SelectEnemy(String),
    ChooseAverage,
    ChooseAllEnemies,
    SelectMember { name: String, location: String },
    ChangeLocationVariant(String),
    ChangeNgLevel(NgLevel),
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    View,
    Progress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub slot: Slot,
    pub seq: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionLookup {
    /// A search came back empty; the query might be a region name.
    Fallback,
    /// The user asked for every enemy in the region.
    Members,
}

/// What to do with the location variants of a freshly fetched record.
#[derive(Debug, Clone, PartialEq)]
pub enum VariantPolicy {
    FromResponse,
    Preserve(Vec<LocationVariant>),
    FillIfMissing(Vec<LocationVariant>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Search {
        query: String,
        ng: NgLevel,
    },
    RegionEnemies {
        region: String,
        ng: NgLevel,
        lookup: RegionLookup,
    },
    RegionAverage {
        region: String,
        ng: NgLevel,
    },
    EncounterDetail {
        name: String,
        ng: NgLevel,
        location: Option<String>,
        variants: VariantPolicy,
    },
    Progress {
        ng: NgLevel,
    },
}

impl Request {
    pub fn slot(&self) -> Slot {
        match self {
            Request::Progress { .. } => Slot::Progress,
            _ => Slot::View,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Enemies(Vec<EnemyStub>),
    Region(RegionSummary),
    Encounter(EncounterRecord),
    Progress(ProgressStats),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub ticket: Ticket,
    pub request: Request,
}

#[derive(Debug)]
pub struct Completion {
    pub ticket: Ticket,
    pub request: Request,
    pub outcome: Result<Response, ApiError>,
}

#[derive(Debug, Default)]
struct Sequencer {
    view: u64,
    progress: u64,
}

impl Sequencer {
    fn counter(&mut self, slot: Slot) -> &mut u64 {
        match slot {
            Slot::View => &mut self.view,
            Slot::Progress => &mut self.progress,
        }
    }

    fn issue(&mut self, slot: Slot) -> Ticket {
        let counter = self.counter(slot);
        *counter += 1;
        Ticket {
            slot,
            seq: *counter,
        }
    }

    /// Makes every outstanding ticket of `slot` stale.
    fn invalidate(&mut self, slot: Slot) {
        *self.counter(slot) += 1;
    }

    fn is_latest(&self, ticket: Ticket) -> bool {
        let latest = match ticket.slot {
            Slot::View => self.view,
            Slot::Progress => self.progress,
        };
        latest == ticket.seq
    }
}

#[derive(Debug)]
pub struct NavigationController {
    view: View,
    ng_level: NgLevel,
    last_query: String,
    last_results: Vec<EnemyStub>,
    busy: bool,
    revision: u64,
    last_error: Option<String>,
    sequencer: Sequencer,
    progress: ProgressTracker,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new(NgLevel::default())
    }
}

impl NavigationController {
    pub fn new(ng_level: NgLevel) -> Self {
        Self {
            view: View::Landing,
            ng_level,
            last_query: String::new(),
            last_results: Vec::new(),
            busy: false,
            revision: 0,
            last_error: None,
            sequencer: Sequencer::default(),
            progress: ProgressTracker::new(),
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn ng_level(&self) -> NgLevel {
        self.ng_level
    }

    pub fn last_query(&self) -> &str {
        &self.last_query
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Bumped on every view change; lets the UI rebuild its component lazily.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    /// Commands to run once at start-up.
    pub fn start(&mut self) -> Vec<Command> {
        vec![self.refresh_progress()]
    }

    pub fn handle(&mut self, intent: Intent) -> Vec<Command> {
        match intent {
            Intent::Search(query) => self.submit_search(&query),
            Intent::SelectEnemy(name) => self.select_enemy(&name),
            Intent::ChooseAverage => self.choose_average(),
            Intent::ChooseAllEnemies => self.choose_all_enemies(),
            Intent::SelectMember { name, location } => self.select_member(&name, &location),
            Intent::ChangeLocationVariant(location) => self.change_location_variant(&location),
            Intent::ChangeNgLevel(level) => self.change_ng_level(level),
            Intent::Back => {
                self.back();
                Vec::new()
            }
        }
    }

    pub fn submit_search(&mut self, query: &str) -> Vec<Command> {
        if !matches!(self.view, View::Landing) {
            return self.ignore("submit_search");
        }
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        self.last_query = query.to_string();
        vec![self.issue(Request::Search {
            query: query.to_string(),
            ng: self.ng_level,
        })]
    }

    pub fn select_enemy(&mut self, name: &str) -> Vec<Command> {
        if !matches!(self.view, View::SearchResults { .. }) {
            return self.ignore("select_enemy");
        }
        vec![self.issue(Request::EncounterDetail {
            name: name.to_string(),
            ng: self.ng_level,
            location: None,
            variants: VariantPolicy::FromResponse,
        })]
    }

    pub fn choose_average(&mut self) -> Vec<Command> {
        let View::RegionChoice { region } = &self.view else {
            return self.ignore("choose_average");
        };
        let request = Request::RegionAverage {
            region: region.clone(),
            ng: self.ng_level,
        };
        vec![self.issue(request)]
    }

    pub fn choose_all_enemies(&mut self) -> Vec<Command> {
        let View::RegionChoice { region } = &self.view else {
            return self.ignore("choose_all_enemies");
        };
        let request = Request::RegionEnemies {
            region: region.clone(),
            ng: self.ng_level,
            lookup: RegionLookup::Members,
        };
        vec![self.issue(request)]
    }

    pub fn select_member(&mut self, name: &str, location: &str) -> Vec<Command> {
        if !matches!(self.view, View::RegionEnemies { .. }) {
            return self.ignore("select_member");
        }
        vec![self.issue(Request::EncounterDetail {
            name: name.to_string(),
            ng: self.ng_level,
            location: Some(location.to_string()),
            variants: VariantPolicy::FromResponse,
        })]
    }

    pub fn change_location_variant(&mut self, location: &str) -> Vec<Command> {
        let View::EnemyDetail {
            record,
            origin: DetailOrigin::Enemy,
        } = &self.view
        else {
            return self.ignore("change_location_variant");
        };
        let request = Request::EncounterDetail {
            name: record.name.clone(),
            ng: self.ng_level,
            location: Some(location.to_string()),
            variants: VariantPolicy::Preserve(record.location_variants.clone()),
        };
        vec![self.issue(request)]
    }

    /// Switches the session NG level. On the detail view the record is
    /// re-fetched at the same name and location.
    pub fn change_ng_level(&mut self, level: NgLevel) -> Vec<Command> {
        if level == self.ng_level {
            return Vec::new();
        }
        log::info!("NG level changed: {} -> {}", self.ng_level, level);
        self.ng_level = level;

        let refetch = match &self.view {
            View::EnemyDetail {
                record,
                origin: DetailOrigin::Enemy,
            } => Some(Request::EncounterDetail {
                name: record.name.clone(),
                ng: level,
                location: Some(record.location.clone()).filter(|l| !l.is_empty()),
                variants: VariantPolicy::FillIfMissing(record.location_variants.clone()),
            }),
            View::EnemyDetail {
                origin: DetailOrigin::RegionAverage { region },
                ..
            } => Some(Request::RegionAverage {
                region: region.clone(),
                ng: level,
            }),
            _ => None,
        };

        let mut commands: Vec<Command> = refetch.into_iter().map(|r| self.issue(r)).collect();
        commands.push(self.refresh_progress());
        commands
    }

    /// Returns to the fixed predecessor of the current view. Late responses for
    /// requests issued before this call are dropped.
    pub fn back(&mut self) {
        let previous = match &self.view {
            View::Landing => return,
            View::SearchResults { .. } | View::RegionChoice { .. } | View::NoResults { .. } => {
                View::Landing
            }
            View::RegionEnemies { region, .. } => View::RegionChoice {
                region: region.clone(),
            },
            View::EnemyDetail { .. } => View::SearchResults {
                results: self.last_results.clone(),
            },
        };
        self.sequencer.invalidate(Slot::View);
        log::debug!("Back: {} -> {}", self.view.name(), previous.name());
        self.set_view(previous);
    }

    /// Applies a finished request. Returns follow-up commands, if any.
    pub fn complete(&mut self, completion: Completion) -> Vec<Command> {
        let Completion {
            ticket,
            request,
            outcome,
        } = completion;

        if !self.sequencer.is_latest(ticket) {
            log::debug!("Discarding stale response #{} for {request:?}", ticket.seq);
            return Vec::new();
        }

        match ticket.slot {
            Slot::Progress => {
                let ng = match &request {
                    Request::Progress { ng } => *ng,
                    _ => self.ng_level,
                };
                let outcome = outcome.and_then(|response| match response {
                    Response::Progress(stats) => Ok(stats),
                    other => Err(ApiError::UnexpectedResponse(format!("{other:?}"))),
                });
                self.progress.apply(ng, outcome);
                Vec::new()
            }
            Slot::View => match outcome {
                Ok(response) => self.apply_response(request, response),
                Err(e) => {
                    log::error!("Request {request:?} failed: {e}");
                    self.last_error = Some(e.to_string());
                    self.busy = false;
                    Vec::new()
                }
            },
        }
    }

    fn apply_response(&mut self, request: Request, response: Response) -> Vec<Command> {
        if let Some(refetch) = self.at_current_level(&request) {
            log::info!("NG level changed while {request:?} was in flight, fetching again");
            return vec![self.issue(refetch)];
        }

        match (request, response) {
            (Request::Search { query, ng }, Response::Enemies(results)) => {
                if results.is_empty() {
                    log::info!("No enemy matches '{query}', trying it as a region");
                    self.last_results.clear();
                    return vec![self.issue(Request::RegionEnemies {
                        region: query,
                        ng,
                        lookup: RegionLookup::Fallback,
                    })];
                }
                let results = dedupe_by_name(results);
                self.last_results = results.clone();
                self.set_view(View::SearchResults { results });
                Vec::new()
            }
            (
                Request::RegionEnemies {
                    region,
                    lookup: RegionLookup::Fallback,
                    ..
                },
                Response::Enemies(members),
            ) => {
                if members.is_empty() {
                    self.set_view(View::NoResults { query: region });
                } else {
                    self.set_view(View::RegionChoice { region });
                }
                Vec::new()
            }
            (
                Request::RegionEnemies {
                    region,
                    lookup: RegionLookup::Members,
                    ..
                },
                Response::Enemies(members),
            ) => {
                self.set_view(View::RegionEnemies { region, members });
                Vec::new()
            }
            (Request::RegionAverage { region, .. }, Response::Region(summary)) => {
                self.set_view(View::EnemyDetail {
                    record: Box::new(summary.to_record()),
                    origin: DetailOrigin::RegionAverage { region },
                });
                vec![self.refresh_progress()]
            }
            (Request::EncounterDetail { variants, .. }, Response::Encounter(mut record)) => {
                match variants {
                    VariantPolicy::FromResponse => {}
                    VariantPolicy::Preserve(previous) => record.location_variants = previous,
                    VariantPolicy::FillIfMissing(previous) => {
                        if record.location_variants.is_empty() {
                            record.location_variants = previous;
                        }
                    }
                }
                self.set_view(View::EnemyDetail {
                    record: Box::new(record),
                    origin: DetailOrigin::Enemy,
                });
                vec![self.refresh_progress()]
            }
            (request, response) => {
                log::error!("Mismatched response {response:?} for {request:?}");
                self.last_error = Some(format!("Unexpected response for {}", self.view.name()));
                self.busy = false;
                Vec::new()
            }
        }
    }

    /// Stat-bearing requests issued at an NG level the session has since left,
    /// rewritten for the current level.
    fn at_current_level(&self, request: &Request) -> Option<Request> {
        let issued_at = match request {
            Request::EncounterDetail { ng, .. } | Request::RegionAverage { ng, .. } => *ng,
            _ => return None,
        };
        if issued_at == self.ng_level {
            return None;
        }
        let mut refetch = request.clone();
        if let Request::EncounterDetail { ng, .. } | Request::RegionAverage { ng, .. } =
            &mut refetch
        {
            *ng = self.ng_level;
        }
        Some(refetch)
    }

    fn refresh_progress(&mut self) -> Command {
        self.issue(Request::Progress { ng: self.ng_level })
    }

    fn issue(&mut self, request: Request) -> Command {
        let slot = request.slot();
        let ticket = self.sequencer.issue(slot);
        if slot == Slot::View {
            self.busy = true;
        }
        log::debug!("Issuing #{} {request:?}", ticket.seq);
        Command { ticket, request }
    }

    fn set_view(&mut self, view: View) {
        log::debug!("View: {} -> {}", self.view.name(), view.name());
        self.view = view;
        self.revision += 1;
        self.busy = false;
        self.last_error = None;
    }

    fn ignore(&self, intent: &str) -> Vec<Command> {
        log::debug!("Ignoring {intent} on {}", self.view.name());
        Vec::new()
    }
}

/// Keeps the first entry for each name, preserving order.
pub fn dedupe_by_name(results: Vec<EnemyStub>) -> Vec<EnemyStub> {
    let mut seen = HashSet::new();
    results
        .into_iter()
        .filter(|stub| seen.insert(stub.name.clone()))
        .collect()
}
