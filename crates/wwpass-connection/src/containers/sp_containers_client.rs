use crate::{
    WWPassConnection, WWPassError,
    api::SpfeRequest,
    containers::{Pfid, containers_client::with_lock},
};

/// Manages the Service Provider's own data containers, which are not bound to any user.
pub struct SpContainersClient<'a> {
    pub(crate) connection: &'a WWPassConnection,
}

impl SpContainersClient<'_> {
    /// Create a new container, optionally with initial content, and return its identifier.
    pub async fn create_pfid(&self, data: Option<&[u8]>) -> Result<Pfid, WWPassError> {
        let request = SpfeRequest::post("sp/create").optional_param("data", data);
        Ok(Pfid::from(self.connection.send(request).await?.data))
    }

    /// Destroy the container. It then behaves as if it had never been created.
    pub async fn remove_pfid(&self, pfid: &Pfid) -> Result<(), WWPassError> {
        let request = SpfeRequest::get("sp/remove").param("pfid", pfid);
        self.connection.send(request).await?;
        Ok(())
    }

    /// Read the content of the container.
    pub async fn read_data_sp(&self, pfid: &Pfid) -> Result<Vec<u8>, WWPassError> {
        let request = SpfeRequest::get("sp/read").param("pfid", pfid);
        Ok(self.connection.send(request).await?.data)
    }

    /// Read the content of the container as UTF-8 text.
    pub async fn read_data_sp_as_string(&self, pfid: &Pfid) -> Result<String, WWPassError> {
        let request = SpfeRequest::get("sp/read").param("pfid", pfid);
        Ok(self.connection.send(request).await?.into_string()?)
    }

    /// Read the content of the container and lock it for `lock_timeout` seconds.
    pub async fn read_data_sp_and_lock(
        &self,
        pfid: &Pfid,
        lock_timeout: u32,
    ) -> Result<Vec<u8>, WWPassError> {
        let request = with_lock(SpfeRequest::get("sp/read").param("pfid", pfid), lock_timeout);
        Ok(self.connection.send(request).await?.data)
    }

    /// [read_data_sp_and_lock][Self::read_data_sp_and_lock], as UTF-8 text.
    pub async fn read_data_sp_as_string_and_lock(
        &self,
        pfid: &Pfid,
        lock_timeout: u32,
    ) -> Result<String, WWPassError> {
        let request = with_lock(SpfeRequest::get("sp/read").param("pfid", pfid), lock_timeout);
        Ok(self.connection.send(request).await?.into_string()?)
    }

    /// Replace the content of the container.
    pub async fn write_data_sp(
        &self,
        pfid: &Pfid,
        data: impl AsRef<[u8]>,
    ) -> Result<(), WWPassError> {
        let request = SpfeRequest::post("sp/write")
            .param("pfid", pfid)
            .param("data", data);
        self.connection.send(request).await?;
        Ok(())
    }

    /// Replace the content of the container and release the lock taken by
    /// [read_data_sp_and_lock][Self::read_data_sp_and_lock].
    pub async fn write_data_sp_and_unlock(
        &self,
        pfid: &Pfid,
        data: impl AsRef<[u8]>,
    ) -> Result<(), WWPassError> {
        let request = SpfeRequest::post("sp/write")
            .param("pfid", pfid)
            .param("data", data)
            .param("unlock", "1");
        self.connection.send(request).await?;
        Ok(())
    }

    /// Take the lock `lockid` for `lock_timeout` seconds.
    pub async fn lock_sp(
        &self,
        lockid: impl AsRef<[u8]>,
        lock_timeout: u32,
    ) -> Result<(), WWPassError> {
        let request = SpfeRequest::get("sp/lock")
            .param("lockid", lockid)
            .param("to", lock_timeout.to_string());
        self.connection.send(request).await?;
        Ok(())
    }

    /// Release the lock `lockid`.
    pub async fn unlock_sp(&self, lockid: impl AsRef<[u8]>) -> Result<(), WWPassError> {
        let request = SpfeRequest::get("sp/unlock").param("lockid", lockid);
        self.connection.send(request).await?;
        Ok(())
    }
}

impl<'a> WWPassConnection {
    /// Access to the Service Provider data containers.
    pub fn sp_containers(&'a self) -> SpContainersClient<'a> {
        SpContainersClient { connection: self }
    }
}
