// Tue Jan 13 2026 - Alex

use crate::analysis::InstructionSource;
use crate::config::Config;
use crate::finders::ServiceCallSite;
use crate::services::{ServiceDescriptor, ServiceTableKind};

/// Builds the comment placed on each service call site.
#[derive(Debug, Clone, Copy)]
pub struct ServiceCommenter {
    include_prototype: bool,
    include_description: bool,
}

impl Default for ServiceCommenter {
    fn default() -> Self {
        Self {
            include_prototype: true,
            include_description: false,
        }
    }
}

impl ServiceCommenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .with_prototype(config.comment_prototype)
            .with_description(config.comment_description)
    }

    pub fn with_prototype(mut self, include: bool) -> Self {
        self.include_prototype = include;
        self
    }

    pub fn with_description(mut self, include: bool) -> Self {
        self.include_description = include;
        self
    }

    pub fn comment(&self, kind: ServiceTableKind, descriptor: &ServiceDescriptor) -> String {
        let header = format!("{}->{}()", kind.comment_prefix(), descriptor.name);

        match (self.include_prototype, self.include_description) {
            (false, true) => format!("{}\n\n{}", header, descriptor.description),
            (true, false) => format!("{}\n\n{}\n\n{}", header, descriptor.prototype, descriptor.parameters),
            (true, true) => format!(
                "{}\n\n{}\n\n{}\n\n{}",
                header, descriptor.prototype, descriptor.description, descriptor.parameters
            ),
            (false, false) => header,
        }
    }

    /// Comments every call site; returns how many were written.
    pub fn annotate<S: InstructionSource + ?Sized>(
        &self,
        source: &mut S,
        kind: ServiceTableKind,
        sites: &[ServiceCallSite],
    ) -> usize {
        for site in sites {
            let text = self.comment(kind, kind.lookup(site.table_offset));
            source.set_comment(site.address, &text);
        }
        sites.len()
    }
}
