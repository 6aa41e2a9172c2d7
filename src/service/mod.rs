pub mod debate_service;
