//! CatalogService - authenticated reads and supervisor edits of the catalogue.

use std::sync::Arc;

use secrecy::SecretString;

use super::errors::CatalogError;
use super::session_context::SessionContext;
use crate::domain::catalog::MovieDetails;
use crate::domain::forms::MovieForm;
use crate::domain::foundation::MovieId;
use crate::ports::MovieCatalog;

pub struct CatalogService {
    catalog: Arc<dyn MovieCatalog>,
    session: Arc<SessionContext>,
}

impl CatalogService {
    pub fn new(catalog: Arc<dyn MovieCatalog>, session: Arc<SessionContext>) -> Self {
        Self { catalog, session }
    }

    /// Token first, then role. Both checks run before any request.
    fn require_supervisor(&self) -> Result<SecretString, CatalogError> {
        let token = self.session.require_token()?;
        let can_manage = self
            .session
            .profile()
            .map(|p| p.role.can_manage_catalog())
            .unwrap_or(false);
        if !can_manage {
            return Err(CatalogError::Forbidden);
        }
        Ok(token)
    }

    pub async fn get_movie(&self, id: MovieId) -> Result<MovieDetails, CatalogError> {
        let token = self.session.require_token()?;
        Ok(self.catalog.get_movie(&token, id).await?)
    }

    /// Returns the server's confirmation message.
    pub async fn create_movie(&self, form: &MovieForm) -> Result<String, CatalogError> {
        let token = self.require_supervisor()?;
        let movie = form.validate()?;
        Ok(self.catalog.create_movie(&token, &movie).await?)
    }

    pub async fn update_movie(
        &self,
        id: MovieId,
        form: &MovieForm,
    ) -> Result<MovieDetails, CatalogError> {
        let token = self.require_supervisor()?;
        let movie = form.validate()?;
        Ok(self.catalog.update_movie(&token, id, &movie).await?)
    }

    pub async fn delete_movie(&self, id: MovieId) -> Result<(), CatalogError> {
        let token = self.require_supervisor()?;
        self.catalog.delete_movie(&token, id).await?;
        Ok(())
    }
}
