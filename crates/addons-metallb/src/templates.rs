//! Packaged MetalLB manifest templates
//!
//! Placeholders:
//! - `OPERATOR_NAMESPACE` - target namespace
//! - `OPERATOR_SUBSCRIPTION_NAME` - OLM subscription name
//! - `OPERATOR_GROUP_NAME` - OLM operator group name
//! - `API_IP`, `INGRESS_IP` - load balancer addresses (operand only)

use addons_common::template::Fragment;

pub const NAMESPACE: &str = r#"apiVersion: v1
kind: Namespace
metadata:
  name: "{{ OPERATOR_NAMESPACE }}"
  labels:
    openshift.io/cluster-monitoring: "true"
  annotations:
    workload.openshift.io/allowed: management
spec: {}"#;

pub const OPERATOR_GROUP: &str = r#"apiVersion: operators.coreos.com/v1
kind: OperatorGroup
metadata:
  name: "{{ OPERATOR_GROUP_NAME }}"
  namespace: "{{ OPERATOR_NAMESPACE }}"
spec:
  targetNamespaces:
  - "{{ OPERATOR_NAMESPACE }}""#;

pub const SUBSCRIPTION: &str = r#"apiVersion: operators.coreos.com/v1alpha1
kind: Subscription
metadata:
  name: "{{ OPERATOR_SUBSCRIPTION_NAME }}"
  namespace: "{{ OPERATOR_NAMESPACE }}"
spec:
  channel: "stable"
  name: metallb-operator
  source: redhat-operators
  sourceNamespace: openshift-marketplace"#;

/// Pool announced for the API address
pub const API_POOL_NAME: &str = "metallb-api-vip";

/// Pool announced for the ingress address
pub const INGRESS_POOL_NAME: &str = "metallb-ingress-ip";

pub const BASE_OPERAND: Fragment = Fragment::new(
    "base-operand",
    r#"apiVersion: metallb.io/v1beta1
kind: MetalLB
metadata:
  name: metallb
  namespace: "{{ OPERATOR_NAMESPACE }}"
---
"#,
);

pub const API_ADDRESS_POOL: Fragment = Fragment::new(
    "api-address-pool",
    r#"apiVersion: metallb.io/v1beta1
kind: IPAddressPool
metadata:
  name: metallb-api-vip
  namespace: "{{ OPERATOR_NAMESPACE }}"
spec:
  autoAssign: false
  addresses:
    - {{ API_IP }}/32
---
"#,
);

pub const INGRESS_ADDRESS_POOL: Fragment = Fragment::new(
    "ingress-address-pool",
    r#"apiVersion: metallb.io/v1beta1
kind: IPAddressPool
metadata:
  name: metallb-ingress-ip
  namespace: "{{ OPERATOR_NAMESPACE }}"
spec:
  autoAssign: false
  addresses:
    - {{ INGRESS_IP }}/32
---
"#,
);

// References both pools whether or not they were emitted.
pub const FOOTER: Fragment = Fragment::new(
    "footer",
    r#"apiVersion: metallb.io/v1beta1
kind: L2Advertisement
metadata:
  name: cluster-api-ingress
  namespace: "{{ OPERATOR_NAMESPACE }}"
spec:
  ipAddressPools:
    - metallb-ingress-ip
    - metallb-api-vip
---
apiVersion: v1
kind: Service
metadata:
  annotations:
    metallb.universe.tf/address-pool: metallb-api-vip
  name: metallb-api
  namespace: openshift-kube-apiserver
spec:
  ports:
  - name: http
    protocol: TCP
    port: 6443
    targetPort: 6443
  selector:
    app: openshift-kube-apiserver
  type: LoadBalancer
---
apiVersion: v1
kind: Service
metadata:
  annotations:
    metallb.universe.tf/address-pool: metallb-ingress-ip
  name: metallb-ingress
  namespace: openshift-ingress
spec:
  ports:
    - name: http
      protocol: TCP
      port: 80
      targetPort: 80
    - name: https
      protocol: TCP
      port: 443
      targetPort: 443
  selector:
    ingresscontroller.operator.openshift.io/deployment-ingresscontroller: default
  type: LoadBalancer"#,
);
