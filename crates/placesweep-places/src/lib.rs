pub mod classify;
pub mod client;
pub mod error;
pub mod location;
pub mod normalize;
pub mod request;
pub mod transport;
pub mod types;

pub use client::PlacesClient;
pub use error::{ErrorCategory, NetworkFailure, PlacesError, TransportFault};
pub use location::{Coordinates, LocationInput};
pub use normalize::{normalize_place, normalize_places, NormalizedPlace, NOT_AVAILABLE};
pub use request::{build_search_request, PlacesRequest, SearchQuery, MAX_RESULT_CAP};
pub use transport::{ReqwestTransport, Transport, TransportResponse};
pub use types::{RawPlace, RawReview};
