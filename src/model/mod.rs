/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Token exchange request and response models
pub mod auth;
/// Response body decoding (JSON and NDJSON)
pub mod decode;
/// Request dispatcher shared by the resource services
pub mod http;
/// Query models for API calls
pub mod requests;
