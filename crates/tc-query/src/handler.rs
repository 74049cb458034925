//! Request dispatch.

use log::{debug, warn};

use tc_catalogue::Catalogue;
use tc_router::{Itinerary, RouterError, Segment, TransportRouter};

use crate::{Response, ResponseBody, RouteItem, StatRequest};

/// Answers [`StatRequest`]s against a frozen catalogue.
///
/// Route requests need a router; without one (no `routing_settings` in the
/// document) they are answered with `"not found"`.
pub struct RequestHandler<'a> {
    catalogue: &'a Catalogue,
    router:    Option<TransportRouter<'a>>,
}

impl<'a> RequestHandler<'a> {
    pub fn new(catalogue: &'a Catalogue) -> Self {
        Self { catalogue, router: None }
    }

    /// Attach a router built over the same catalogue.
    pub fn with_router(mut self, router: TransportRouter<'a>) -> Self {
        debug_assert!(std::ptr::eq(router.catalogue(), self.catalogue));
        self.router = Some(router);
        self
    }

    pub fn handle_all(&self, requests: &[StatRequest]) -> Vec<Response> {
        requests.iter().map(|r| self.handle(r)).collect()
    }

    pub fn handle(&self, request: &StatRequest) -> Response {
        let body = match request {
            StatRequest::Bus { name, .. } => self.bus(name),
            StatRequest::Stop { name, .. } => self.stop(name),
            StatRequest::Route { from, to, .. } => self.route(from, to),
            StatRequest::Map { .. } => {
                warn!("request {}: map rendering is not supported", request.id());
                ResponseBody::Error { error_message: "map rendering is not supported".to_string() }
            }
        };
        Response { request_id: request.id(), body }
    }

    fn bus(&self, name: &str) -> ResponseBody {
        match self.catalogue.bus_stats_by_name(name) {
            Some(stats) => ResponseBody::Bus {
                curvature:         stats.curvature,
                route_length:      stats.route_length,
                stop_count:        stats.stop_count,
                unique_stop_count: stats.unique_stop_count,
            },
            None => ResponseBody::not_found(),
        }
    }

    fn stop(&self, name: &str) -> ResponseBody {
        match self.catalogue.bus_names_for_stop(name) {
            Some(buses) => ResponseBody::Stop {
                buses: buses.into_iter().map(str::to_string).collect(),
            },
            None => ResponseBody::not_found(),
        }
    }

    fn route(&self, from: &str, to: &str) -> ResponseBody {
        let Some(router) = &self.router else {
            warn!("route {from:?} -> {to:?} requested but no routing settings were supplied");
            return ResponseBody::not_found();
        };
        match router.route_by_name(from, to) {
            Ok(itinerary) => self.route_body(&itinerary),
            Err(e @ (RouterError::UnknownStop(_) | RouterError::Unreachable { .. })) => {
                debug!("{e}");
                ResponseBody::not_found()
            }
            Err(e) => {
                warn!("route {from:?} -> {to:?} failed: {e}");
                ResponseBody::not_found()
            }
        }
    }

    fn route_body(&self, itinerary: &Itinerary) -> ResponseBody {
        let items = itinerary
            .segments
            .iter()
            .map(|segment| match *segment {
                Segment::Wait { stop, time } => RouteItem::Wait {
                    stop_name: self.catalogue.stop(stop).name.clone(),
                    time,
                },
                Segment::Ride { bus, time, span_count } => RouteItem::Bus {
                    bus: self.catalogue.bus(bus).name.clone(),
                    span_count,
                    time,
                },
            })
            .collect();
        ResponseBody::Route { total_time: itinerary.total_time, items }
    }
}
