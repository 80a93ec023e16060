use crate::annotations::{AnnotationKeys, Annotations, PORT_MAXIMUM, PORT_MINIMUM};
use crate::error::{AnnotationError, SrvField};
use crate::rr::SrvValues;

impl AnnotationKeys {
    pub fn srv_key(&self, field: SrvField) -> &str {
        match field {
            SrvField::Priority => &self.srv_priority,
            SrvField::Weight => &self.srv_weight,
            SrvField::Port => &self.srv_port,
        }
    }

    /// Read one SRV field, returning the parsed value along with the raw annotation.
    fn srv_field<'a, A>(
        &self,
        field: SrvField,
        service: &str,
        annotations: &'a A,
    ) -> Result<(i64, &'a str), AnnotationError>
    where
        A: Annotations + ?Sized,
    {
        let raw = annotations.annotation(self.srv_key(field)).ok_or_else(|| {
            AnnotationError::MissingSrvField {
                field,
                service: service.to_owned(),
            }
        })?;

        let value = raw
            .parse::<i64>()
            .map_err(|_| AnnotationError::InvalidSrvField {
                field,
                value: raw.to_owned(),
                service: service.to_owned(),
            })?;

        Ok((value, raw))
    }

    /// Read SRV priority, weight and port from annotations.
    ///
    /// Fields are checked in that order and the first problem found is returned, so a resource
    /// missing both weight and port reports the missing weight. All three are required. Only
    /// the port is range checked, against `[PORT_MINIMUM, PORT_MAXIMUM]`.
    #[tracing::instrument("srv", skip_all, fields(%service), level = "trace")]
    pub fn srv_values<A>(&self, service: &str, annotations: &A) -> Result<SrvValues, AnnotationError>
    where
        A: Annotations + ?Sized,
    {
        let (priority, _) = self.srv_field(SrvField::Priority, service, annotations)?;
        let (weight, _) = self.srv_field(SrvField::Weight, service, annotations)?;
        let (port, raw_port) = self.srv_field(SrvField::Port, service, annotations)?;

        if !(PORT_MINIMUM..=PORT_MAXIMUM).contains(&port) {
            return Err(AnnotationError::SrvPortOutOfRange {
                min: PORT_MINIMUM,
                max: PORT_MAXIMUM,
                value: raw_port.to_owned(),
                service: service.to_owned(),
            });
        }

        tracing::trace!(priority, weight, port, "parsed srv annotations");
        Ok(SrvValues::new(priority, weight, port))
    }
}

/// Read SRV values using the default annotation keys, see [`AnnotationKeys::srv_values`].
pub fn srv_values_from_annotations<A>(
    service: &str,
    annotations: &A,
) -> Result<SrvValues, AnnotationError>
where
    A: Annotations + ?Sized,
{
    AnnotationKeys::DEFAULT.srv_values(service, annotations)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::annotations::{
        SRV_PORT_ANNOTATION_KEY as PORT, SRV_PRIORITY_ANNOTATION_KEY as PRIORITY,
        SRV_WEIGHT_ANNOTATION_KEY as WEIGHT,
    };
    use crate::error::ErrorKind;

    const SERVICE: &str = "testSvc";

    fn srv(pairs: &[(&str, &str)]) -> Result<SrvValues, AnnotationError> {
        srv_values_from_annotations(SERVICE, pairs)
    }

    fn message(pairs: &[(&str, &str)]) -> String {
        srv(pairs).unwrap_err().to_string()
    }

    #[test]
    fn priority_missing() {
        assert_eq!(
            message(&[("foo", "bar")]),
            r#"must specify priority value for SRV record. service "testSvc""#
        );
    }

    #[test]
    fn priority_not_a_number() {
        assert_eq!(
            message(&[(PRIORITY, "foo")]),
            r#"priorty value must be int number, got "foo". service "testSvc""#
        );
    }

    #[test]
    fn weight_missing() {
        let error = srv(&[(PRIORITY, "0")]).unwrap_err();
        assert_eq!(
            error.to_string(),
            r#"must specify weight value for SRV record. service "testSvc""#
        );
        assert_eq!(error.kind(), ErrorKind::Absent);
        assert_eq!(error.srv_field(), Some(SrvField::Weight));
    }

    #[test]
    fn weight_not_a_number() {
        assert_eq!(
            message(&[(PRIORITY, "0"), (WEIGHT, "foo")]),
            r#"weight value must be int number, got "foo". service "testSvc""#
        );
    }

    #[test]
    fn port_missing() {
        assert_eq!(
            message(&[(PRIORITY, "0"), (WEIGHT, "0")]),
            r#"must specify port value for SRV record. service "testSvc""#
        );
    }

    #[test]
    fn port_not_a_number() {
        assert_eq!(
            message(&[(PRIORITY, "0"), (WEIGHT, "0"), (PORT, "foo")]),
            r#"port value must be int number, got "foo". service "testSvc""#
        );
    }

    #[test]
    fn port_negative() {
        let error = srv(&[(PRIORITY, "0"), (WEIGHT, "0"), (PORT, "-1")]).unwrap_err();
        assert_eq!(
            error.to_string(),
            r#"port value must be between [0, 65535], got "-1". service "testSvc""#
        );
        assert_eq!(error.kind(), ErrorKind::Range);
    }

    #[test]
    fn port_too_high() {
        assert_eq!(
            message(&[(PRIORITY, "0"), (WEIGHT, "0"), (PORT, "100000")]),
            r#"port value must be between [0, 65535], got "100000". service "testSvc""#
        );
    }

    #[test]
    fn port_bounds_are_inclusive() {
        assert_eq!(
            srv(&[(PRIORITY, "0"), (WEIGHT, "0"), (PORT, "0")]),
            Ok(SrvValues::new(0, 0, 0))
        );
        assert_eq!(
            srv(&[(PRIORITY, "0"), (WEIGHT, "0"), (PORT, "65535")]),
            Ok(SrvValues::new(0, 0, 65535))
        );
    }

    #[test]
    fn earlier_fields_are_reported_first() {
        assert_eq!(
            srv(&[(PORT, "100000"), (WEIGHT, "x"), (PRIORITY, "y")])
                .unwrap_err()
                .srv_field(),
            Some(SrvField::Priority)
        );
    }

    #[test]
    fn priority_and_weight_are_not_range_checked() {
        assert_eq!(
            srv(&[(PRIORITY, "-10"), (WEIGHT, "1000000"), (PORT, "53")]),
            Ok(SrvValues::new(-10, 1_000_000, 53))
        );
    }

    #[test]
    fn set_correctly() {
        let annotations: HashMap<&str, &str> = [(PRIORITY, "5"), (WEIGHT, "7"), (PORT, "443")]
            .into_iter()
            .collect();
        let values = srv_values_from_annotations(SERVICE, &annotations).unwrap();
        assert_eq!(<(i64, i64, i64)>::from(values), (5, 7, 443));
        assert_eq!(values.port(), Some(443));
    }
}
