// This file makes the hook modules available to the rest of the application.

pub mod use_poller;
