//! Integration tests for the classifier service and its storage backends

mod cli_contracts;
mod failure_injection;
mod support;
