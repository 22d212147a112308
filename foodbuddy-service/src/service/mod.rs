//! `RouteService` implementation.

use foodbuddy_core::{DistanceMatrix, LookupError, Place, PlaceLookup, RoutePlanner};

use crate::request::require_list_id;
use crate::{
    DistanceMatrixResponse, Envelope, OptimiseRouteRequest, OptimiseRouteResponse, ServiceConfig,
    ServiceError,
};

/// Validates requests, resolves lists and delegates ordering to a planner.
///
/// The service holds no mutable state, so a shared reference can serve
/// concurrent requests when `L` and `P` are `Sync`.
///
/// # Examples
/// ```
/// use foodbuddy_catalogue::Catalogue;
/// use foodbuddy_planner::NearestNeighbourPlanner;
/// use foodbuddy_service::{OptimiseRouteRequest, RouteService, ServiceConfig};
///
/// let catalogue = Catalogue::singapore()?;
/// let service = RouteService::new(catalogue, NearestNeighbourPlanner::new(), ServiceConfig::default());
/// let route = service.optimise(&OptimiseRouteRequest::for_list("list-4"))?;
/// assert_eq!(route.optimized_order, ["place-6", "place-7"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct RouteService<L, P> {
    lookup: L,
    planner: P,
    config: ServiceConfig,
}

impl<L, P> RouteService<L, P>
where
    L: PlaceLookup,
    P: RoutePlanner,
{
    /// Assemble a service from its collaborators.
    #[must_use]
    pub const fn new(lookup: L, planner: P, config: ServiceConfig) -> Self {
        Self {
            lookup,
            planner,
            config,
        }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Plan a walking route through the places of the requested list.
    ///
    /// # Errors
    ///
    /// - `VALIDATION_ERROR` for a missing list id or an invalid start.
    /// - `NOT_FOUND` when the list does not exist.
    /// - `EMPTY_LIST` when the list has no places.
    /// - `OPTIMIZE_ERROR` for lookup outages, planner failures or a plan
    ///   that does not visit every place exactly once.
    pub fn optimise(
        &self,
        request: &OptimiseRouteRequest,
    ) -> Result<OptimiseRouteResponse, ServiceError> {
        let list_id = request.list_id()?;
        let start = request.start(self.config.default_start)?;
        let places = self.resolve(list_id)?;
        if places.is_empty() {
            log::debug!("list {list_id} has no places to route");
            return Err(ServiceError::empty_list());
        }

        let plan = self
            .planner
            .plan(&places, start)
            .map_err(|err| ServiceError::internal(&err))?;
        if !plan.is_permutation_of(&places) {
            let detail = format!(
                "planner returned {:?} for list {list_id} with {} places",
                plan.order(),
                places.len()
            );
            return Err(ServiceError::internal(&detail));
        }
        Ok(OptimiseRouteResponse::from_plan(list_id, &plan))
    }

    /// [`Self::optimise`] wrapped in the response envelope.
    #[must_use]
    pub fn respond(&self, request: &OptimiseRouteRequest) -> Envelope<OptimiseRouteResponse> {
        self.optimise(request).into()
    }

    /// Pairwise distances and walking times between the places of a list.
    ///
    /// An existing empty list yields an empty matrix.
    ///
    /// # Errors
    ///
    /// - `VALIDATION_ERROR` for a blank list id.
    /// - `NOT_FOUND` when the list does not exist.
    /// - `OPTIMIZE_ERROR` when the lookup is unavailable.
    pub fn distance_matrix(&self, list_id: &str) -> Result<DistanceMatrixResponse, ServiceError> {
        let list_id = require_list_id(Some(list_id))?;
        let places = self.resolve(list_id)?;
        let matrix = DistanceMatrix::between(&places);
        Ok(DistanceMatrixResponse {
            list_id: list_id.to_owned(),
            place_ids: matrix.ids().to_vec(),
            distances: matrix.rounded_metres(),
            walking_times: matrix.rounded_minutes(self.config.pace),
        })
    }

    /// [`Self::distance_matrix`] wrapped in the response envelope.
    #[must_use]
    pub fn respond_matrix(&self, list_id: &str) -> Envelope<DistanceMatrixResponse> {
        self.distance_matrix(list_id).into()
    }

    fn resolve(&self, list_id: &str) -> Result<Vec<Place>, ServiceError> {
        self.lookup.resolve_places(list_id).map_err(|err| match err {
            LookupError::ListNotFound { .. } => {
                log::debug!("{err}");
                ServiceError::not_found()
            }
            LookupError::Unavailable { .. } => ServiceError::internal(&err),
        })
    }
}
