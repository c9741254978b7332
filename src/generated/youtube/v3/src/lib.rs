// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// Code generated by discogen. DO NOT EDIT.

//! Google APIs Client Library for Rust - YouTube Data API v3
//!
//! The YouTube Data API v3 is an API that provides access to YouTube data, such
//! as videos, playlists, and channels.
//!
//! This crate contains the types and functions to interact with the YouTube Data API v3.
//! Most applications will use the structs defined in the [client] module.
//!
//! More information about the service at <https://developers.google.com/youtube/>.

pub use gax::Result;
pub use gax::error::Error;

pub mod client;
pub mod model;

mod descriptors;
