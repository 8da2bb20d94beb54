mod company;
mod contract;
mod issue;
mod offer;
mod owner;
mod property;
mod provider;
mod rate_limit;
mod tenant;
mod uploaded_file;
mod user;
mod workflow_notification;
