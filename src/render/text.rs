use crate::pipeline::Pipe;
use crate::pipeline::pipes::{
    CommandPipe, ContextDetailsPipe, ContextMapPipe, ExceptionPipe, InternalErrorsPipe,
    KnownIssuesPipe, MessagePipe, OccurredAtPipe, RequestPipe, TitlePipe, UserPipe,
};

use super::Renderer;

/// The default human-readable report format.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn pipes(&self) -> Vec<Box<dyn Pipe>> {
        vec![
            Box::new(TitlePipe::default()),
            Box::new(MessagePipe),
            Box::new(ExceptionPipe),
            Box::new(CommandPipe),
            Box::new(RequestPipe),
            Box::new(UserPipe),
            Box::new(OccurredAtPipe),
            Box::new(KnownIssuesPipe),
            Box::new(ContextMapPipe),
            Box::new(InternalErrorsPipe::default()),
            Box::new(ContextDetailsPipe),
        ]
    }
}
