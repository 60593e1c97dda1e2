use esxkit_api::models::{IpConfig, NetworkInfo};
use indexmap::IndexMap;
use serde::Serialize;

/// `network` category document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NetworkFacts {
    pub pnics: IndexMap<String, PnicFacts>,
    pub vnics: IndexMap<String, VnicFacts>,
    pub portgroups: IndexMap<String, PortgroupFacts>,
    #[serde(rename = "proxySwitch")]
    pub proxy_switch: IndexMap<String, ProxySwitchFacts>,
    pub vswitch: IndexMap<String, VswitchFacts>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PnicFacts {
    pub driver: Option<String>,
    pub mac: String,
    pub pci: Option<String>,
    /// Absent when the driver reports no link speed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullduplex: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VnicFacts {
    pub portgroup: Option<String>,
    pub mac: Option<String>,
    pub mtu: Option<i32>,
    pub ipv4: Ipv4Facts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<Ipv6Facts>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ipv4Facts {
    pub address: Option<String>,
    pub netmask: Option<String>,
    pub dhcp: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ipv6Facts {
    pub address: String,
    pub prefix: i32,
    pub autoconf: Option<bool>,
    pub dhcp: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortgroupFacts {
    pub name: String,
    pub vlan_id: i32,
    pub vswitch_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxySwitchFacts {
    pub dvs_name: Option<String>,
    pub dvs_uuid: Option<String>,
    pub num_ports: Option<i32>,
    pub config_num_ports: Option<i32>,
    pub num_ports_available: Option<i32>,
    pub mtu: Option<i32>,
    pub network_reservation_supported: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VswitchFacts {
    pub name: String,
    pub num_ports: Option<i32>,
    pub num_ports_available: Option<i32>,
    pub mtu: Option<i32>,
}

pub fn network_facts(info: &NetworkInfo) -> NetworkFacts {
    let pnics = info
        .pnic
        .iter()
        .map(|nic| {
            // Speed and duplex are reported together or not at all.
            let link = nic
                .link_speed
                .and_then(|l| l.speed_mb.zip(l.duplex));
            let facts = PnicFacts {
                driver: nic.driver.clone(),
                mac: nic.mac.clone(),
                pci: nic.pci.clone(),
                speed: link.map(|(speed, _)| speed),
                fullduplex: link.map(|(_, duplex)| duplex),
            };
            (nic.device.clone(), facts)
        })
        .collect();

    let vnics = info
        .vnic
        .iter()
        .map(|nic| {
            let facts = VnicFacts {
                portgroup: nic.portgroup.clone(),
                mac: nic.spec.mac.clone(),
                mtu: nic.spec.mtu,
                ipv4: Ipv4Facts {
                    address: nic.spec.ip.ip_address.clone(),
                    netmask: nic.spec.ip.subnet_mask.clone(),
                    dhcp: nic.spec.ip.dhcp,
                },
                ipv6: ipv6_facts(&nic.spec.ip),
            };
            (nic.device.clone(), facts)
        })
        .collect();

    let portgroups = info
        .portgroup
        .iter()
        .map(|pg| {
            let facts = PortgroupFacts {
                name: pg.spec.name.clone(),
                vlan_id: pg.spec.vlan_id,
                vswitch_name: pg.spec.vswitch_name.clone(),
            };
            (pg.key.clone(), facts)
        })
        .collect();

    let proxy_switch = info
        .proxy_switch
        .iter()
        .map(|psw| {
            let facts = ProxySwitchFacts {
                dvs_name: psw.dvs_name.clone(),
                dvs_uuid: psw.dvs_uuid.clone(),
                num_ports: psw.num_ports,
                config_num_ports: psw.config_num_ports,
                num_ports_available: psw.num_ports_available,
                mtu: psw.mtu,
                network_reservation_supported: psw.network_reservation_supported,
            };
            (psw.key.clone(), facts)
        })
        .collect();

    let vswitch = info
        .vswitch
        .iter()
        .map(|vsw| {
            let facts = VswitchFacts {
                name: vsw.name.clone(),
                num_ports: vsw.num_ports,
                num_ports_available: vsw.num_ports_available,
                mtu: vsw.mtu,
            };
            (vsw.key.clone(), facts)
        })
        .collect();

    NetworkFacts {
        pnics,
        vnics,
        portgroups,
        proxy_switch,
        vswitch,
    }
}

/// First configured IPv6 address, if it is complete.
fn ipv6_facts(ip: &IpConfig) -> Option<Ipv6Facts> {
    let config = ip.ipv6_config.as_ref()?;
    let first = config.ipv6_address.first()?;
    Some(Ipv6Facts {
        address: first.ip_address.clone()?,
        prefix: first.prefix_length?,
        autoconf: config.auto_configuration_enabled,
        dhcp: config.dhcpv6_enabled,
    })
}
