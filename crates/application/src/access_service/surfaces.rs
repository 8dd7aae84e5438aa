use wattgrant_domain::PortalSurface;

use super::*;

impl AccessControlService {
    /// Returns the portal surfaces the actor's role may mount.
    ///
    /// A surface is accessible when the role holds at least one of the
    /// permissions required by that surface (logical OR).
    #[must_use]
    pub fn accessible_surfaces(&self, actor: &Actor) -> Vec<PortalSurface> {
        let mut surfaces = Vec::new();
        for surface in PortalSurface::all() {
            if self.has_any_permission(actor.role(), surface.required_permissions()) {
                surfaces.push(*surface);
            }
        }

        surfaces
    }
}
