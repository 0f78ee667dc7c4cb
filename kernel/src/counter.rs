use crate::KernelError;

/// Counter service standing in for the hosting web layer's session counter.
#[async_trait::async_trait]
pub trait VisitCounter: 'static + Sync + Send {
    async fn get(&self, key: &str) -> error_stack::Result<i64, KernelError>;
    async fn set(&self, key: &str, value: i64) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnVisitCounter: 'static + Sync + Send {
    type VisitCounter: VisitCounter;
    fn visit_counter(&self) -> &Self::VisitCounter;
}
