use crate::{Ticket, WWPassConnection, WWPassError, api::SpfeRequest};

/// Reads and writes the data containers bound to a user.
///
/// Every call takes an authenticated ticket of the user. `container` selects one of several
/// containers the Service Provider keeps for the user; `None` is the default container.
pub struct ContainersClient<'a> {
    pub(crate) connection: &'a WWPassConnection,
}

impl ContainersClient<'_> {
    /// Read the content of the container.
    pub async fn read_data(
        &self,
        ticket: &Ticket,
        container: Option<&str>,
    ) -> Result<Vec<u8>, WWPassError> {
        let request = read_request(ticket, container);
        Ok(self.connection.send(request).await?.data)
    }

    /// Read the content of the container as UTF-8 text.
    pub async fn read_data_as_string(
        &self,
        ticket: &Ticket,
        container: Option<&str>,
    ) -> Result<String, WWPassError> {
        let request = read_request(ticket, container);
        Ok(self.connection.send(request).await?.into_string()?)
    }

    /// Read the content of the container and lock it for `lock_timeout` seconds, so no other
    /// client can lock it before this one writes it back.
    pub async fn read_data_and_lock(
        &self,
        ticket: &Ticket,
        container: Option<&str>,
        lock_timeout: u32,
    ) -> Result<Vec<u8>, WWPassError> {
        let request = with_lock(read_request(ticket, container), lock_timeout);
        Ok(self.connection.send(request).await?.data)
    }

    /// [read_data_and_lock][Self::read_data_and_lock], as UTF-8 text.
    pub async fn read_data_as_string_and_lock(
        &self,
        ticket: &Ticket,
        container: Option<&str>,
        lock_timeout: u32,
    ) -> Result<String, WWPassError> {
        let request = with_lock(read_request(ticket, container), lock_timeout);
        Ok(self.connection.send(request).await?.into_string()?)
    }

    /// Replace the content of the container.
    pub async fn write_data(
        &self,
        ticket: &Ticket,
        data: impl AsRef<[u8]>,
        container: Option<&str>,
    ) -> Result<(), WWPassError> {
        let request = write_request(ticket, data, container);
        self.connection.send(request).await?;
        Ok(())
    }

    /// Replace the content of the container and release the lock taken by
    /// [read_data_and_lock][Self::read_data_and_lock].
    pub async fn write_data_and_unlock(
        &self,
        ticket: &Ticket,
        data: impl AsRef<[u8]>,
        container: Option<&str>,
    ) -> Result<(), WWPassError> {
        let request = write_request(ticket, data, container).param("unlock", "1");
        self.connection.send(request).await?;
        Ok(())
    }

    /// Take a lock for `lock_timeout` seconds. Locks are advisory: they only exclude other lock
    /// attempts with the same `lockid`.
    pub async fn lock(
        &self,
        ticket: &Ticket,
        lock_timeout: u32,
        lockid: Option<&str>,
    ) -> Result<(), WWPassError> {
        let request = SpfeRequest::get("lock")
            .param("ticket", ticket.as_str())
            .param("to", lock_timeout.to_string())
            .optional_param("lockid", lockid);
        self.connection.send(request).await?;
        Ok(())
    }

    /// Release a lock taken by [lock][Self::lock].
    pub async fn unlock(&self, ticket: &Ticket, lockid: Option<&str>) -> Result<(), WWPassError> {
        let request = SpfeRequest::get("unlock")
            .param("ticket", ticket.as_str())
            .optional_param("lockid", lockid);
        self.connection.send(request).await?;
        Ok(())
    }
}

fn read_request(ticket: &Ticket, container: Option<&str>) -> SpfeRequest {
    SpfeRequest::get("read")
        .param("ticket", ticket.as_str())
        .optional_param("container", container)
}

fn write_request(ticket: &Ticket, data: impl AsRef<[u8]>, container: Option<&str>) -> SpfeRequest {
    SpfeRequest::post("write")
        .param("ticket", ticket.as_str())
        .param("data", data)
        .optional_param("container", container)
}

pub(crate) fn with_lock(request: SpfeRequest, lock_timeout: u32) -> SpfeRequest {
    request
        .param("to", lock_timeout.to_string())
        .param("lock", "1")
}

impl<'a> WWPassConnection {
    /// Access to the data containers bound to users.
    pub fn containers(&'a self) -> ContainersClient<'a> {
        ContainersClient { connection: self }
    }
}
