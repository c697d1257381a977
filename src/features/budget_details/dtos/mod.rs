mod realization_api_dto;

pub use realization_api_dto::{DataRequest, LoginRequest, LoginResponse, PageEnvelope};
