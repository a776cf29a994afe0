//! gRPC transport layer.

mod account_grpc;

pub use account_grpc::AccountGrpcService;
